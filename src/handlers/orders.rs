//! Order handlers: list, create, update, delete.
//!
//! Update and delete answer success even when no row carries the id; the
//! store's zero-rows-affected is only logged.

use crate::error::{Operation, OperationError};
use crate::extractors::JsonBody;
use crate::models::{Order, OrderInput};
use crate::response::{self, MessageBody, ORDER_CREATED, ORDER_DELETED, ORDER_UPDATED};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// Obtiene todos los pedidos
#[utoipa::path(
    get,
    path = "/pedidos",
    tag = "Pedidos",
    responses(
        (status = 200, description = "Lista de todos los pedidos", body = Vec<Order>),
        (status = 500, description = "Error obteniendo los pedidos", body = String, content_type = "text/plain")
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, OperationError> {
    let orders = state
        .store
        .list_orders()
        .await
        .map_err(|e| e.during(Operation::ListOrders))?;
    Ok(Json(orders))
}

/// Crear un nuevo pedido
#[utoipa::path(
    post,
    path = "/pedidos",
    tag = "Pedidos",
    request_body = OrderInput,
    responses(
        (status = 201, description = "Pedido creado exitosamente", body = MessageBody),
        (status = 400, description = "Cuerpo JSON mal formado", body = String, content_type = "text/plain"),
        (status = 415, description = "Falta Content-Type: application/json", body = String, content_type = "text/plain"),
        (status = 500, description = "Error creando el pedido", body = String, content_type = "text/plain")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<(StatusCode, Json<MessageBody>), OperationError> {
    let input = OrderInput::from_body(body);
    let id = state
        .store
        .create_order(&input)
        .await
        .map_err(|e| e.during(Operation::CreateOrder))?;
    tracing::info!(id, "order created");
    Ok(response::created(ORDER_CREATED))
}

/// Actualiza un pedido existente
#[utoipa::path(
    put,
    path = "/pedidos/{id}",
    tag = "Pedidos",
    params(("id" = i32, Path, description = "ID del pedido a actualizar")),
    request_body = OrderInput,
    responses(
        (status = 200, description = "Pedido actualizado correctamente", body = MessageBody),
        (status = 400, description = "Identificador o cuerpo JSON mal formado", body = String, content_type = "text/plain"),
        (status = 415, description = "Falta Content-Type: application/json", body = String, content_type = "text/plain"),
        (status = 500, description = "Error actualizando el pedido", body = String, content_type = "text/plain")
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(body): JsonBody<Value>,
) -> Result<(StatusCode, Json<MessageBody>), OperationError> {
    let input = OrderInput::from_body(body);
    let affected = state
        .store
        .update_order(id, &input)
        .await
        .map_err(|e| e.during(Operation::UpdateOrder))?;
    if affected == 0 {
        tracing::warn!(id, "update matched no order");
    }
    Ok(response::ok(ORDER_UPDATED))
}

/// Elimina un pedido existente
#[utoipa::path(
    delete,
    path = "/pedidos/{id}",
    tag = "Pedidos",
    params(("id" = i32, Path, description = "ID del pedido a eliminar")),
    responses(
        (status = 200, description = "Pedido eliminado correctamente", body = MessageBody),
        (status = 400, description = "Identificador mal formado", body = String, content_type = "text/plain"),
        (status = 500, description = "Error eliminando el pedido", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, Json<MessageBody>), OperationError> {
    let affected = state
        .store
        .delete_order(id)
        .await
        .map_err(|e| e.during(Operation::DeleteOrder))?;
    if affected == 0 {
        tracing::warn!(id, "delete matched no order");
    }
    Ok(response::ok(ORDER_DELETED))
}
