//! Configuration for the pipeline

use serde::{Deserialize, Serialize};

/// Configuration passed into the orchestrator at construction.
///
/// There is no process-wide state: every run gets its folder identifiers
/// from an explicit config value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Identifier of the folder holding the verdict documents
    pub source_folder_id: String,

    /// Identifier of the folder that receives the JSON records
    pub target_folder_id: String,
}

impl PipelineConfig {
    /// Create a config from folder identifiers
    pub fn new(source_folder_id: impl Into<String>, target_folder_id: impl Into<String>) -> Self {
        Self {
            source_folder_id: source_folder_id.into(),
            target_folder_id: target_folder_id.into(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.source_folder_id.is_empty() {
            return Err("source_folder_id must not be empty".to_string());
        }
        if self.target_folder_id.is_empty() {
            return Err("target_folder_id must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = PipelineConfig::new("src", "dst");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_source_folder() {
        let config = PipelineConfig::new("", "dst");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_target_folder() {
        let config = PipelineConfig::new("src", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::new("folder-a", "folder-b");
        let toml_str = config.to_toml().unwrap();
        let parsed = PipelineConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.source_folder_id, parsed.source_folder_id);
        assert_eq!(config.target_folder_id, parsed.target_folder_id);
    }
}
