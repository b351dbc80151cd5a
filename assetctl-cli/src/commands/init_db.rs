//! Create the database schema without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use assetctl_server::db::pool::DEFAULT_DATABASE_URL;
use assetctl_server::{create_pool, DbConfig};

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

/// Open the database once so the schema gets created, then exit.
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let config = DbConfig {
        database_url: args.database_url,
        ..DbConfig::default()
    };

    let pool = create_pool(&config)
        .await
        .with_context(|| format!("Failed to initialize {}", config.database_url))?;
    pool.close().await;

    println!("Database ready: {}", config.database_url);
    Ok(())
}
