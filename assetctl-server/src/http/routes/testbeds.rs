//! Testbed endpoints

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::db::TestbedRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{DbConn, ValidJson};
use crate::http::state::AppState;
use crate::models::{CreateTestbed, Testbed};

/// GET /testbeds - list all testbeds
async fn list_testbeds(DbConn(mut conn): DbConn) -> Result<Json<Vec<Testbed>>, ApiError> {
    let testbeds = TestbedRepo::new(&mut conn).list().await?;
    tracing::debug!(count = testbeds.len(), "Listed testbeds");
    Ok(Json(testbeds))
}

/// POST /testbeds - create a new testbed
async fn create_testbed(
    DbConn(mut conn): DbConn,
    ValidJson(req): ValidJson<CreateTestbed>,
) -> Result<(StatusCode, Json<Testbed>), ApiError> {
    let testbed = TestbedRepo::new(&mut conn).create(&req).await?;
    tracing::debug!(testbed_id = testbed.id, name = %testbed.name, "Created testbed");
    Ok((StatusCode::CREATED, Json(testbed)))
}

/// Testbed routes
pub fn router() -> Router<AppState> {
    Router::new().route("/testbeds", get(list_testbeds).post(create_testbed))
}
