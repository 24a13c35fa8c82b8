//! Confirmation bodies returned by order writes.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ORDER_CREATED: &str = "Pedido creado exitosamente";
pub const ORDER_UPDATED: &str = "Pedido actualizado correctamente";
pub const ORDER_DELETED: &str = "Pedido eliminado correctamente";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Pedido creado exitosamente")]
    pub message: String,
}

pub fn message(status: StatusCode, text: &str) -> (StatusCode, Json<MessageBody>) {
    (
        status,
        Json(MessageBody {
            message: text.to_string(),
        }),
    )
}

pub fn created(text: &str) -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::CREATED, text)
}

pub fn ok(text: &str) -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::OK, text)
}
