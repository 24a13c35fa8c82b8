//! Catalog and order records, request bodies and query parameters.
//!
//! Non-key columns are nullable: the schema is owned by the store and an order
//! created without some field keeps NULL there.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

/// A product offered by the nursery (table `catalogo`, read-only here).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CatalogItem {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Rosa")]
    pub nombre: Option<String>,
    #[schema(example = "Plantas de jardín")]
    pub categoria: Option<String>,
    #[schema(example = 50.5)]
    pub precio: Option<f64>,
    #[schema(example = 100)]
    pub stock: Option<i32>,
}

/// A customer order (table `pedidos`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Order {
    pub id: i32,
    pub cliente: Option<String>,
    pub planta: Option<String>,
    pub cantidad: Option<i32>,
    pub total: Option<f64>,
}

/// Body of create and update. Nothing is checked here: each field is kept as sent
/// and converted by the store, so `"2"` or `2.5` for `cantidad` reach it unchanged.
/// Missing fields are written as NULL.
#[derive(Clone, Debug, Default, PartialEq, ToSchema)]
pub struct OrderInput {
    #[schema(value_type = Option<String>, example = "Ana")]
    pub cliente: Option<Value>,
    #[schema(value_type = Option<String>, example = "Rosa")]
    pub planta: Option<Value>,
    #[schema(value_type = Option<i32>, example = 2)]
    pub cantidad: Option<Value>,
    #[schema(value_type = Option<f64>, example = 101)]
    pub total: Option<Value>,
}

impl OrderInput {
    /// Pick the four fields out of a JSON body. Anything but an object yields all NULLs.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut map) => OrderInput {
                cliente: take_field(&mut map, "cliente"),
                planta: take_field(&mut map, "planta"),
                cantidad: take_field(&mut map, "cantidad"),
                total: take_field(&mut map, "total"),
            },
            _ => OrderInput::default(),
        }
    }
}

fn take_field(map: &mut Map<String, Value>, key: &str) -> Option<Value> {
    map.remove(key).filter(|v| !v.is_null())
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// Filter by category (ej Plantas de jardín, Plantas silvestres, Plantas para cosecha)
    pub categoria: Option<String>,
}

impl CatalogQuery {
    /// The category to filter on; an empty value means no filter.
    pub fn filter(&self) -> Option<&str> {
        self.categoria.as_deref().filter(|c| !c.is_empty())
    }
}
