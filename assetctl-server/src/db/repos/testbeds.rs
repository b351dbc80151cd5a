//! Testbed repository
//!
//! - create: name pre-check for a friendly Conflict; the UNIQUE
//!   constraint still catches concurrent inserts
//! - delete_cascade: runs, then configs, then the testbed, in one
//!   transaction

use sqlx::sqlite::SqliteRow;
use sqlx::{Connection, Row, SqliteConnection};

use super::DbError;
use crate::models::{CreateTestbed, Testbed};

/// Row counts removed by `TestbedRepo::delete_cascade`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeletedRows {
    pub testbeds: u64,
    pub configs: u64,
    pub runs: u64,
}

/// Testbed repository
pub struct TestbedRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> TestbedRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Create a testbed, failing with `Conflict` if the name is taken.
    pub async fn create(&mut self, req: &CreateTestbed) -> Result<Testbed, DbError> {
        if self.find_by_name(&req.name).await?.is_some() {
            return Err(DbError::Conflict {
                resource: "testbed",
                name: req.name.clone(),
            });
        }

        let row = sqlx::query(
            r#"
            INSERT INTO testbeds (name, location, description)
            VALUES (?, ?, ?)
            RETURNING id, name, location, description
            "#,
        )
        .bind(&req.name)
        .bind(req.location.as_deref())
        .bind(req.description.as_deref())
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| DbError::from_insert(e, "testbed", &req.name))?;

        Ok(testbed_from_row(&row)?)
    }

    /// List every testbed in insertion order.
    pub async fn list(&mut self) -> Result<Vec<Testbed>, DbError> {
        let rows = sqlx::query("SELECT id, name, location, description FROM testbeds ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows
            .iter()
            .map(testbed_from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Look up a testbed by its unique name.
    pub async fn find_by_name(&mut self, name: &str) -> Result<Option<Testbed>, DbError> {
        let row = sqlx::query("SELECT id, name, location, description FROM testbeds WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.as_ref().map(testbed_from_row).transpose()?)
    }

    /// Check whether a testbed with this id exists.
    pub async fn exists(&mut self, id: i64) -> Result<bool, DbError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM testbeds WHERE id = ?)")
                .bind(id)
                .fetch_one(&mut *self.conn)
                .await?;
        Ok(exists)
    }

    /// Delete a testbed together with its configs and their runs.
    ///
    /// Children go first so the foreign keys never see an orphan. Any
    /// failure rolls the whole removal back.
    pub async fn delete_cascade(&mut self, id: i64) -> Result<DeletedRows, DbError> {
        let mut tx = self.conn.begin().await?;

        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM testbeds WHERE id = ?)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            return Err(DbError::NotFound {
                resource: "testbed",
                id,
            });
        }

        let runs = sqlx::query(
            r#"
            DELETE FROM test_runs
            WHERE simulation_config_id IN (
                SELECT id FROM simulation_configs WHERE testbed_id = ?
            )
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let configs = sqlx::query("DELETE FROM simulation_configs WHERE testbed_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let testbeds = sqlx::query("DELETE FROM testbeds WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::info!(testbed_id = id, configs, runs, "Testbed deleted with descendants");
        Ok(DeletedRows {
            testbeds,
            configs,
            runs,
        })
    }
}

fn testbed_from_row(row: &SqliteRow) -> Result<Testbed, sqlx::Error> {
    Ok(Testbed {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        location: row.try_get("location")?,
        description: row.try_get("description")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool_in_memory, ConfigRepo, RunRepo};
    use crate::models::{CreateSimulationConfig, CreateTestRun, RunResult};

    fn testbed(name: &str) -> CreateTestbed {
        CreateTestbed {
            name: name.into(),
            location: Some("Lab A".into()),
            description: None,
        }
    }

    fn config(testbed_id: i64, name: &str) -> CreateSimulationConfig {
        CreateSimulationConfig {
            testbed_id,
            name: name.into(),
            sim_version: None,
            os: None,
            notes: None,
            is_current_config: false,
        }
    }

    fn run(simulation_config_id: i64) -> CreateTestRun {
        CreateTestRun {
            simulation_config_id,
            operator: None,
            result: RunResult::Fail,
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_and_list_round_trip() {
        let pool = create_pool_in_memory().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = TestbedRepo::new(&mut conn);

        let created = repo.create(&testbed("rig-1")).await.unwrap();
        assert_eq!(created.name, "rig-1");
        assert_eq!(created.location.as_deref(), Some("Lab A"));
        assert!(created.description.is_none());

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() {
        let pool = create_pool_in_memory().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = TestbedRepo::new(&mut conn);

        repo.create(&testbed("rig-1")).await.unwrap();
        let err = repo.create(&testbed("rig-1")).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { resource: "testbed", .. }));

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unique_constraint_maps_to_conflict() {
        let pool = create_pool_in_memory().await.unwrap();
        sqlx::query("INSERT INTO testbeds (name) VALUES ('rig-1')")
            .execute(&pool)
            .await
            .unwrap();

        let err = sqlx::query("INSERT INTO testbeds (name) VALUES ('rig-1')")
            .execute(&pool)
            .await
            .unwrap_err();
        let mapped = DbError::from_insert(err, "testbed", "rig-1");
        assert!(matches!(mapped, DbError::Conflict { .. }));
    }

    #[tokio::test]
    async fn exists_reports_presence() {
        let pool = create_pool_in_memory().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = TestbedRepo::new(&mut conn);

        let created = repo.create(&testbed("rig-1")).await.unwrap();
        assert!(repo.exists(created.id).await.unwrap());
        assert!(!repo.exists(9999).await.unwrap());
    }

    #[tokio::test]
    async fn delete_cascade_removes_descendants_only() {
        let pool = create_pool_in_memory().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let doomed = TestbedRepo::new(&mut conn).create(&testbed("doomed")).await.unwrap();
        let kept = TestbedRepo::new(&mut conn).create(&testbed("kept")).await.unwrap();

        let c1 = ConfigRepo::new(&mut conn).create(&config(doomed.id, "a")).await.unwrap();
        let c2 = ConfigRepo::new(&mut conn).create(&config(doomed.id, "b")).await.unwrap();
        let c3 = ConfigRepo::new(&mut conn).create(&config(kept.id, "c")).await.unwrap();
        for cfg in [c1.id, c1.id, c2.id, c3.id] {
            RunRepo::new(&mut conn).create(&run(cfg)).await.unwrap();
        }

        let deleted = TestbedRepo::new(&mut conn).delete_cascade(doomed.id).await.unwrap();
        assert_eq!(
            deleted,
            DeletedRows {
                testbeds: 1,
                configs: 2,
                runs: 3,
            }
        );

        assert_eq!(TestbedRepo::new(&mut conn).list().await.unwrap(), vec![kept]);
        let configs = ConfigRepo::new(&mut conn).list(None).await.unwrap();
        assert_eq!(configs, vec![c3.clone()]);
        let runs = RunRepo::new(&mut conn).list(None).await.unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].simulation_config_id, c3.id);
    }

    #[tokio::test]
    async fn delete_cascade_missing_testbed_is_not_found() {
        let pool = create_pool_in_memory().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let err = TestbedRepo::new(&mut conn).delete_cascade(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "testbed", id: 42 }));
    }

    #[tokio::test]
    async fn foreign_keys_block_implicit_parent_removal() {
        let pool = create_pool_in_memory().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let tb = TestbedRepo::new(&mut conn).create(&testbed("rig")).await.unwrap();
        ConfigRepo::new(&mut conn).create(&config(tb.id, "cfg")).await.unwrap();

        let res = sqlx::query("DELETE FROM testbeds WHERE id = ?")
            .bind(tb.id)
            .execute(&mut *conn)
            .await;
        assert!(res.is_err());
    }
}
