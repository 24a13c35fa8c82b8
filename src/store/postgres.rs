//! [`ViveroStore`] over a PostgreSQL connection pool.

use super::ViveroStore;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{CatalogItem, Order, OrderInput};
use crate::sql::{bind_opt, catalog_select, orders_select, DELETE_ORDER, INSERT_ORDER, PING, UPDATE_ORDER};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    fn pool_options(config: &AppConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
    }

    /// Open the pool and establish the first connection.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let pool = Self::pool_options(config).connect(&config.database_url).await?;
        Ok(Self::new(pool))
    }

    /// Build the pool without connecting; connections are opened on first use.
    pub fn connect_lazy(config: &AppConfig) -> Result<Self, AppError> {
        let pool = Self::pool_options(config).connect_lazy(&config.database_url)?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ViveroStore for PgStore {
    async fn list_catalog(&self, categoria: Option<&str>) -> Result<Vec<CatalogItem>, AppError> {
        let q = catalog_select(categoria);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, CatalogItem>(&q.sql);
        for p in &q.params {
            query = query.bind(p.as_str());
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        let sql = orders_select();
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Order>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create_order(&self, input: &OrderInput) -> Result<i32, AppError> {
        tracing::debug!(sql = INSERT_ORDER, params = ?input, "query");
        let id = sqlx::query_scalar::<_, i32>(INSERT_ORDER)
            .bind(bind_opt(&input.cliente))
            .bind(bind_opt(&input.planta))
            .bind(bind_opt(&input.cantidad))
            .bind(bind_opt(&input.total))
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update_order(&self, id: i32, input: &OrderInput) -> Result<u64, AppError> {
        tracing::debug!(sql = UPDATE_ORDER, id, params = ?input, "query");
        let result = sqlx::query(UPDATE_ORDER)
            .bind(bind_opt(&input.cliente))
            .bind(bind_opt(&input.planta))
            .bind(bind_opt(&input.cantidad))
            .bind(bind_opt(&input.total))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_order(&self, id: i32) -> Result<u64, AppError> {
        tracing::debug!(sql = DELETE_ORDER, id, "query");
        let result = sqlx::query(DELETE_ORDER).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query(PING).execute(&self.pool).await?;
        Ok(())
    }
}
