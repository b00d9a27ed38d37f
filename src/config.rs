//! Configuration loading and management for gist.
//!
//! Loads settings from `gist.toml` with an environment variable override for
//! the API key. The config file is optional; with no file present the key
//! must come from `GEMINI_API_KEY`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Gemini model identifier (e.g., "gemini-2.0-flash")
    #[serde(default = "default_model")]
    pub model: String,
}

/// API keys configuration (file value, overridable from the environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub gemini_key: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

impl Config {
    /// Load configuration from the default location (gist.toml in cwd or home).
    ///
    /// A missing file is not an error; defaults are used and the API key is
    /// expected from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from(&path)?,
            None => Config::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Override the API key from the environment
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.api.gemini_key = Some(key);
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("gist.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("gist").join("gist.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// The configured API key, if any non-empty value is present
    pub fn api_key(&self) -> Option<&str> {
        self.api.gemini_key.as_deref().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_nothing_is_configured() {
        let config = Config::default();
        assert_eq!(config.agent.model, "gemini-2.0-flash");
        assert!(config.api_key().is_none());
    }

    #[test]
    fn loads_model_and_key_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[agent]\nmodel = \"gemini-2.5-pro\"\n\n[api]\ngemini_key = \"file-key\"\n"
        )
        .unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.agent.model, "gemini-2.5-pro");
        assert_eq!(config.api_key(), Some("file-key"));
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ngemini_key = \"file-key\"\n").unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.agent.model, "gemini-2.0-flash");
    }

    #[test]
    fn empty_key_counts_as_absent() {
        let config = Config {
            api: ApiConfig {
                gemini_key: Some(String::new()),
            },
            ..Config::default()
        };
        assert!(config.api_key().is_none());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[").unwrap();

        let result = Config::load_from(&file.path().to_path_buf());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
