//! Typed errors and HTTP mapping.
//!
//! Store failures are classified into an [`ErrorKind`] for logging, but every
//! failed data operation is answered with the same 500 and a fixed message.
//! Malformed request bodies never get this far; see [`crate::extractors::JsonBody`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("validation: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("store unreachable: {0}")]
    Connectivity(#[source] sqlx::Error),
    #[error("constraint violated: {0}")]
    Constraint(#[source] sqlx::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[source] sqlx::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Connectivity,
    Constraint,
    NotFound,
    Validation,
    Database,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Connectivity => "connectivity",
            ErrorKind::Constraint => "constraint",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation",
            ErrorKind::Database => "database",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Connectivity(_) => ErrorKind::Connectivity,
            AppError::Constraint(_) => ErrorKind::Constraint,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Db(_) => ErrorKind::Database,
        }
    }

    /// Attach the operation that failed, which decides the client-facing message.
    pub fn during(self, operation: Operation) -> OperationError {
        OperationError {
            operation,
            source: self,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => AppError::Connectivity(e),
            sqlx::Error::RowNotFound => AppError::NotFound("row".into()),
            sqlx::Error::Database(db) => {
                // SQLSTATE class 22: a value the store could not convert, e.g. "dos" as an integer.
                if db.code().is_some_and(|c| c.starts_with("22")) {
                    return AppError::Validation(db.message().to_string());
                }
                let violation = !matches!(db.kind(), sqlx::error::ErrorKind::Other);
                if violation || db.constraint().is_some() {
                    AppError::Constraint(e)
                } else {
                    AppError::Db(e)
                }
            }
            _ => AppError::Db(e),
        }
    }
}

/// The five store operations exposed over HTTP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    ListCatalog,
    ListOrders,
    CreateOrder,
    UpdateOrder,
    DeleteOrder,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::ListCatalog => "list_catalog",
            Operation::ListOrders => "list_orders",
            Operation::CreateOrder => "create_order",
            Operation::UpdateOrder => "update_order",
            Operation::DeleteOrder => "delete_order",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListCatalog => "Error obteniendo el catálogo",
            Operation::ListOrders => "Error obteniendo los pedidos",
            Operation::CreateOrder => "Error creando el pedido",
            Operation::UpdateOrder => "Error actualizando el pedido",
            Operation::DeleteOrder => "Error eliminando el pedido",
        }
    }
}

#[derive(Error, Debug)]
#[error("{} failed: {source}", .operation.name())]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub source: AppError,
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        tracing::error!(
            operation = self.operation.name(),
            kind = %self.source.kind(),
            error = %self.source,
            "data access failed"
        );
        (StatusCode::INTERNAL_SERVER_ERROR, self.operation.failure_message()).into_response()
    }
}
