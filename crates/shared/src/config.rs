//! Configuration types for propkit

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Access-gate configuration.
///
/// The valid unlock code lives here rather than inside the gate logic, so
/// deployments can swap it without touching the entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateConfig {
    /// Code the gate accepts as a valid credential
    pub access_code: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            access_code: "1234".to_string(),
        }
    }
}

impl GateConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        if config.access_code.is_empty() {
            return Err(ModelError::Config(
                "accessCode must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse() {
        let json = r#"{ "accessCode": "8842" }"#;
        let config: GateConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.access_code, "8842");
    }

    #[test]
    fn test_default_code() {
        assert_eq!(GateConfig::default().access_code, "1234");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gate.json");
        std::fs::write(&path, r#"{ "accessCode": "8842" }"#).unwrap();

        let config = GateConfig::from_file(&path).unwrap();
        assert_eq!(config.access_code, "8842");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = GateConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn test_from_file_rejects_empty_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gate.json");
        std::fs::write(&path, r#"{ "accessCode": "" }"#).unwrap();

        let err = GateConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ModelError::Config(_)));
    }
}
