//! HTTP server command
//!
//! Opens the database (creating the schema if needed) and serves the
//! testbed/config/run API until interrupted.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use assetctl_server::db::pool::DEFAULT_DATABASE_URL;
use assetctl_server::{create_pool, run_server, DbConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting assetctl server on {}", args.bind);

    let db_config = DbConfig {
        database_url: args.database_url,
        max_connections: args.max_connections,
    };
    let pool = create_pool(&db_config)
        .await
        .context("Failed to open database")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
