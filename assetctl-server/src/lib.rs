//! assetctl-server: HTTP record keeping for test equipment
//!
//! Tracks testbeds, the simulation configs they run, and the
//! individual test runs recorded against each config.
//!
//! - `models` - request/response shapes and validation
//! - `db` - SQLite pool, schema, and repositories
//! - `http` - Axum router, extractors, and error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbConfig};
pub use http::{build_router, run_server, AppState, ServerConfig};
