//! Catalog and order routes.

use crate::handlers::{create_order, delete_order, list_catalog, list_orders, update_order};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/catalogo", get(list_catalog))
        .route("/pedidos", get(list_orders).post(create_order))
        .route("/pedidos/:id", put(update_order).delete(delete_order))
        .with_state(state)
}
