//! Schema creation for the asset tables
//!
//! Foreign keys are declared without `ON DELETE CASCADE`; removing a
//! testbed goes through `TestbedRepo::delete_cascade`.

use sqlx::SqlitePool;

use super::repos::DbError;

/// Create all tables and indexes if they do not exist yet.
pub async fn run(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Ensuring asset schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS testbeds (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) NOT NULL UNIQUE,
            location VARCHAR(100),
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS simulation_configs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            testbed_id INTEGER NOT NULL REFERENCES testbeds(id),
            name VARCHAR(100) NOT NULL,
            sim_version VARCHAR(50),
            os VARCHAR(50),
            notes TEXT,
            is_current_config BOOLEAN NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS test_runs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            simulation_config_id INTEGER NOT NULL REFERENCES simulation_configs(id),
            operator VARCHAR(100),
            result TEXT NOT NULL DEFAULT 'IN_PROGRESS'
                CHECK (result IN ('PASS', 'FAIL', 'IN_PROGRESS')),
            notes TEXT,
            run_date TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Asset schema ready");
    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_simulation_configs_testbed ON simulation_configs(testbed_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_test_runs_config ON test_runs(simulation_config_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
