//! Database layer - connection pool, schema, and repositories
//!
//! - Connection pool sized by `DbConfig`; handlers borrow one connection
//!   per request through the `DbConn` extractor
//! - Schema is created on start-up if absent
//! - Parent rows are checked before child inserts so callers get a
//!   NotFound instead of a foreign key failure

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_in_memory, DbConfig};
pub use repos::*;
