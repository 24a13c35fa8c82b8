//! OpenAPI description generated from the handler annotations.

use crate::handlers;
use crate::models::{CatalogItem, Order, OrderInput};
use crate::response::MessageBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vivero API",
        version = "1.0.0",
        description = "API para gestionar el catálogo y pedidos de un vivero de plantas y flores"
    ),
    servers((url = "http://localhost:3000")),
    paths(
        handlers::catalog::list_catalog,
        handlers::orders::list_orders,
        handlers::orders::create_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
    ),
    components(schemas(CatalogItem, Order, OrderInput, MessageBody)),
    tags(
        (name = "Catálogo", description = "Productos del vivero"),
        (name = "Pedidos", description = "Pedidos de clientes")
    )
)]
pub struct ApiDoc;
