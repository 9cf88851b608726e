//! CLI configuration loaded from a TOML file

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use verdict_llm::gemini;

/// The static configuration of one batch run
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Directory holding the verdict documents
    pub source_dir: String,

    /// Directory that receives the JSON records
    pub target_dir: String,

    /// Gemini API key; may also come from the GEMINI_API_KEY environment
    /// variable via the command line
    #[serde(default)]
    pub api_key: String,

    /// Generation API base URL
    #[serde(default = "default_endpoint")]
    pub api_endpoint: String,

    /// Generation model name
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_endpoint() -> String {
    gemini::DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    gemini::DEFAULT_MODEL.to_string()
}

impl CliConfig {
    /// Read and parse the configuration file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        Ok(config)
    }

    /// Validate the configuration before starting a run
    pub fn validate(&self) -> Result<(), String> {
        if self.source_dir.is_empty() {
            return Err("source_dir must not be empty".to_string());
        }
        if self.target_dir.is_empty() {
            return Err("target_dir must not be empty".to_string());
        }
        if self.api_key.is_empty() {
            return Err(
                "api_key is required (set it in the config file or via GEMINI_API_KEY)"
                    .to_string(),
            );
        }
        Ok(())
    }
}
