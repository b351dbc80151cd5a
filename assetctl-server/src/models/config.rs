//! Simulation config request and record types

use serde::{Deserialize, Serialize};

/// Create simulation config request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSimulationConfig {
    pub testbed_id: i64,
    pub name: String,
    /// Older clients send this as `software_version`.
    #[serde(default, alias = "software_version")]
    pub sim_version: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_current_config: bool,
}

/// Software/OS configuration associated with one testbed.
///
/// `is_current_config` is not exclusive: several configs on the same
/// testbed may carry the flag at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub id: i64,
    pub testbed_id: i64,
    pub name: String,
    pub sim_version: Option<String>,
    pub os: Option<String>,
    pub notes: Option<String>,
    pub is_current_config: bool,
}

/// Query filter for `GET /configs`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ConfigFilter {
    pub testbed_id: Option<i64>,
}
