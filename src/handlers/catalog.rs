//! Catalog handlers (read-only).

use crate::error::{Operation, OperationError};
use crate::models::{CatalogItem, CatalogQuery};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

/// Obtiene el catálogo de plantas y flores
///
/// Retorna una lista del catálogo de plantas y flores. Puedes filtrar por categoría.
#[utoipa::path(
    get,
    path = "/catalogo",
    tag = "Catálogo",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Lista de productos del catálogo", body = Vec<CatalogItem>),
        (status = 500, description = "Error obteniendo el catálogo", body = String, content_type = "text/plain")
    )
)]
pub async fn list_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<CatalogItem>>, OperationError> {
    let items = state
        .store
        .list_catalog(query.filter())
        .await
        .map_err(|e| e.during(Operation::ListCatalog))?;
    Ok(Json(items))
}
