//! Repository implementations for database access
//!
//! Repositories borrow a single connection for their lifetime. Handlers
//! hand them the request-scoped connection from `DbConn`.

pub mod configs;
pub mod runs;
pub mod testbeds;

pub use configs::ConfigRepo;
pub use runs::RunRepo;
pub use testbeds::{DeletedRows, TestbedRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("{resource} with name '{name}' already exists")]
    Conflict { resource: &'static str, name: String },

    #[error("unreadable row: {0}")]
    Decode(String),
}

impl DbError {
    /// Translate a unique-constraint failure into `Conflict`, pass
    /// everything else through.
    pub(crate) fn from_insert(err: sqlx::Error, resource: &'static str, name: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict {
                resource,
                name: name.to_owned(),
            },
            _ => Self::Sqlx(err),
        }
    }
}
