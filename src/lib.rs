//! Vivero API: plant nursery catalog and customer orders over HTTP, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, ErrorKind, Operation, OperationError};
pub use openapi::ApiDoc;
pub use routes::{api_routes, docs_routes, probe_routes, OPENAPI_PATH};
pub use state::AppState;
pub use store::{PgStore, ViveroStore};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Build the full router: probes, catalog/orders API and the OpenAPI document.
///
/// Does not bind a listener; the caller serves it.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(probe_routes(state.clone()))
        .merge(api_routes(state))
        .merge(docs_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
        )
}
