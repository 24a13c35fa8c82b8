//! Routers: probes, the catalog/orders API and its documentation.

pub mod api;
pub mod docs;
pub mod probes;

pub use api::api_routes;
pub use docs::{docs_routes, OPENAPI_PATH};
pub use probes::probe_routes;
