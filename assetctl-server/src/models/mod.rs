//! Domain models with validation at the API boundary
//!
//! Request types decide which fields are required and what the
//! defaults are. Response types are what the API serializes.

pub mod config;
pub mod run;
pub mod run_result;
pub mod testbed;
pub mod validation;

pub use config::{ConfigFilter, CreateSimulationConfig, SimulationConfig};
pub use run::{CreateTestRun, RunFilter, TestRun};
pub use run_result::RunResult;
pub use testbed::{CreateTestbed, Testbed};
pub use validation::ValidationError;
