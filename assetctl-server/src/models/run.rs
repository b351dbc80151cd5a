//! Test run request and record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RunResult;

/// Create test run request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestRun {
    pub simulation_config_id: i64,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub result: RunResult,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A single execution of a simulation config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRun {
    pub id: i64,
    pub simulation_config_id: i64,
    pub operator: Option<String>,
    pub result: RunResult,
    pub notes: Option<String>,
    /// Assigned by the server when the run is recorded
    pub run_date: DateTime<Utc>,
}

/// Query filter for `GET /runs`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RunFilter {
    pub simulation_config_id: Option<i64>,
}
