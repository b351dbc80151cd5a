//! Test run endpoints

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::db::RunRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{DbConn, ValidJson, ValidQuery};
use crate::http::state::AppState;
use crate::models::{CreateTestRun, RunFilter, TestRun};

/// GET /runs?simulation_config_id= - list runs, optionally for one config
async fn list_runs(
    DbConn(mut conn): DbConn,
    ValidQuery(filter): ValidQuery<RunFilter>,
) -> Result<Json<Vec<TestRun>>, ApiError> {
    let runs = RunRepo::new(&mut conn)
        .list(filter.simulation_config_id)
        .await?;
    Ok(Json(runs))
}

/// POST /runs - record a run against an existing config
async fn create_run(
    DbConn(mut conn): DbConn,
    ValidJson(req): ValidJson<CreateTestRun>,
) -> Result<(StatusCode, Json<TestRun>), ApiError> {
    let run = RunRepo::new(&mut conn).create(&req).await?;
    tracing::debug!(
        run_id = run.id,
        config_id = run.simulation_config_id,
        result = %run.result,
        "Recorded test run"
    );
    Ok((StatusCode::CREATED, Json(run)))
}

/// Test run routes
pub fn router() -> Router<AppState> {
    Router::new().route("/runs", get(list_runs).post(create_run))
}
