//! Simulation config endpoints

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::db::ConfigRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{DbConn, ValidJson, ValidQuery};
use crate::http::state::AppState;
use crate::models::{ConfigFilter, CreateSimulationConfig, SimulationConfig};

/// GET /configs?testbed_id= - list configs, optionally for one testbed
async fn list_configs(
    DbConn(mut conn): DbConn,
    ValidQuery(filter): ValidQuery<ConfigFilter>,
) -> Result<Json<Vec<SimulationConfig>>, ApiError> {
    let configs = ConfigRepo::new(&mut conn).list(filter.testbed_id).await?;
    tracing::debug!(
        testbed_id = ?filter.testbed_id,
        count = configs.len(),
        "Listed simulation configs"
    );
    Ok(Json(configs))
}

/// POST /configs - create a config for an existing testbed
async fn create_config(
    DbConn(mut conn): DbConn,
    ValidJson(req): ValidJson<CreateSimulationConfig>,
) -> Result<(StatusCode, Json<SimulationConfig>), ApiError> {
    let config = ConfigRepo::new(&mut conn).create(&req).await?;
    tracing::debug!(
        config_id = config.id,
        testbed_id = config.testbed_id,
        "Created simulation config"
    );
    Ok((StatusCode::CREATED, Json(config)))
}

/// Simulation config routes
pub fn router() -> Router<AppState> {
    Router::new().route("/configs", get(list_configs).post(create_config))
}
