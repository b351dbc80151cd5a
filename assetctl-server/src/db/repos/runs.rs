//! Test run repository
//!
//! `run_date` is assigned here at insert time; callers never supply it.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

use super::{ConfigRepo, DbError};
use crate::models::{CreateTestRun, RunResult, TestRun};

/// Test run repository
pub struct RunRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> RunRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Record a run against an existing simulation config.
    pub async fn create(&mut self, req: &CreateTestRun) -> Result<TestRun, DbError> {
        if !ConfigRepo::new(&mut *self.conn)
            .exists(req.simulation_config_id)
            .await?
        {
            return Err(DbError::NotFound {
                resource: "simulation config",
                id: req.simulation_config_id,
            });
        }

        let row = sqlx::query(
            r#"
            INSERT INTO test_runs (simulation_config_id, operator, result, notes, run_date)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, simulation_config_id, operator, result, notes, run_date
            "#,
        )
        .bind(req.simulation_config_id)
        .bind(req.operator.as_deref())
        .bind(req.result.as_str())
        .bind(req.notes.as_deref())
        .bind(Utc::now())
        .fetch_one(&mut *self.conn)
        .await?;

        run_from_row(&row)
    }

    /// List runs, optionally only those recorded against one config.
    pub async fn list(&mut self, simulation_config_id: Option<i64>) -> Result<Vec<TestRun>, DbError> {
        let rows = match simulation_config_id {
            Some(id) => {
                sqlx::query(
                    r#"
                    SELECT id, simulation_config_id, operator, result, notes, run_date
                    FROM test_runs
                    WHERE simulation_config_id = ?
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
                    SELECT id, simulation_config_id, operator, result, notes, run_date
                    FROM test_runs
                    ORDER BY id
                    "#,
                )
                .fetch_all(&mut *self.conn)
                .await?
            }
        };

        rows.iter().map(run_from_row).collect()
    }
}

fn run_from_row(row: &SqliteRow) -> Result<TestRun, DbError> {
    let result: String = row.try_get("result")?;
    let result = result
        .parse::<RunResult>()
        .map_err(|e| DbError::Decode(e.to_string()))?;

    Ok(TestRun {
        id: row.try_get("id")?,
        simulation_config_id: row.try_get("simulation_config_id")?,
        operator: row.try_get("operator")?,
        result,
        notes: row.try_get("notes")?,
        run_date: row.try_get("run_date")?,
    })
}
