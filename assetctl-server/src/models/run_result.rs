//! Test run outcome

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Allowed outcomes for a test run.
///
/// Stored and serialized as `PASS`, `FAIL`, or `IN_PROGRESS`. Any other
/// string is rejected during deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunResult {
    Pass,
    Fail,
    #[default]
    InProgress,
}

impl RunResult {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::InProgress => "IN_PROGRESS",
        }
    }
}

impl FromStr for RunResult {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "FAIL" => Ok(Self::Fail),
            "IN_PROGRESS" => Ok(Self::InProgress),
            other => Err(ValidationError::InvalidVariant {
                field: "result",
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
