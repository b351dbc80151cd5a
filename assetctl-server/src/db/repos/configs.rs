//! Simulation config repository

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

use super::{DbError, TestbedRepo};
use crate::models::{CreateSimulationConfig, SimulationConfig};

/// Simulation config repository
pub struct ConfigRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ConfigRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Create a config for an existing testbed.
    ///
    /// Returns `NotFound` when the testbed does not exist; nothing is
    /// written in that case.
    pub async fn create(
        &mut self,
        req: &CreateSimulationConfig,
    ) -> Result<SimulationConfig, DbError> {
        if !TestbedRepo::new(&mut *self.conn).exists(req.testbed_id).await? {
            return Err(DbError::NotFound {
                resource: "testbed",
                id: req.testbed_id,
            });
        }

        let row = sqlx::query(
            r#"
            INSERT INTO simulation_configs (testbed_id, name, sim_version, os, notes, is_current_config)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, testbed_id, name, sim_version, os, notes, is_current_config
            "#,
        )
        .bind(req.testbed_id)
        .bind(&req.name)
        .bind(req.sim_version.as_deref())
        .bind(req.os.as_deref())
        .bind(req.notes.as_deref())
        .bind(req.is_current_config)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(config_from_row(&row)?)
    }

    /// List configs, optionally only those belonging to one testbed.
    pub async fn list(&mut self, testbed_id: Option<i64>) -> Result<Vec<SimulationConfig>, DbError> {
        let rows = match testbed_id {
            Some(id) => {
                sqlx::query(
                    r#"
                    SELECT id, testbed_id, name, sim_version, os, notes, is_current_config
                    FROM simulation_configs
                    WHERE testbed_id = ?
                    ORDER BY id
                    "#,
                )
                .bind(id)
                .fetch_all(&mut *self.conn)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, testbed_id, name, sim_version, os, notes, is_current_config
                    FROM simulation_configs
                    ORDER BY id
                    "#,
                )
                .fetch_all(&mut *self.conn)
                .await?
            }
        };

        Ok(rows
            .iter()
            .map(config_from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Check whether a config with this id exists.
    pub async fn exists(&mut self, id: i64) -> Result<bool, DbError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM simulation_configs WHERE id = ?)")
                .bind(id)
                .fetch_one(&mut *self.conn)
                .await?;
        Ok(exists)
    }
}

fn config_from_row(row: &SqliteRow) -> Result<SimulationConfig, sqlx::Error> {
    Ok(SimulationConfig {
        id: row.try_get("id")?,
        testbed_id: row.try_get("testbed_id")?,
        name: row.try_get("name")?,
        sim_version: row.try_get("sim_version")?,
        os: row.try_get("os")?,
        notes: row.try_get("notes")?,
        is_current_config: row.try_get("is_current_config")?,
    })
}
