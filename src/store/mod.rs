//! Data access: the operations the HTTP layer needs from the relational store.

mod postgres;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::models::{CatalogItem, Order, OrderInput};
use async_trait::async_trait;

/// Store seam injected into handlers through [`crate::state::AppState`].
///
/// Writes report the number of rows affected; callers decide what zero means.
#[async_trait]
pub trait ViveroStore: Send + Sync {
    /// Catalog rows, restricted to an exact category when one is given.
    async fn list_catalog(&self, categoria: Option<&str>) -> Result<Vec<CatalogItem>, AppError>;

    async fn list_orders(&self) -> Result<Vec<Order>, AppError>;

    /// Insert an order and return the id assigned by the store.
    async fn create_order(&self, input: &OrderInput) -> Result<i32, AppError>;

    /// Overwrite all four fields of order `id`.
    async fn update_order(&self, id: i32, input: &OrderInput) -> Result<u64, AppError>;

    async fn delete_order(&self, id: i32) -> Result<u64, AppError>;

    /// Round trip to the store, used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
