//! Testbed request and record types

use serde::{Deserialize, Serialize};

/// Create testbed request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestbed {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A hardware rig (local or remote) that can run simulations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testbed {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_none() {
        let req: CreateTestbed = serde_json::from_str(r#"{"name": "rig-1"}"#).unwrap();
        assert_eq!(req.name, "rig-1");
        assert!(req.location.is_none());
        assert!(req.description.is_none());
    }

    #[test]
    fn name_is_required() {
        assert!(serde_json::from_str::<CreateTestbed>(r#"{"location": "Lab A"}"#).is_err());
    }
}
