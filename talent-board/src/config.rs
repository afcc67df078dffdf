use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

const CONFIG_PATH_VAR: &str = "TALENT_BOARD_CONFIG";
const ENV_PREFIX: &str = "TALENT_BOARD";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Maximum number of log entries kept for the Logs screen
    #[serde(default = "default_log_buffer_size")]
    pub log_buffer_size: usize,
}

fn default_api_url() -> String {
    talent_api::DEFAULT_BASE_URL.to_string()
}

fn default_log_buffer_size() -> usize {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            log_buffer_size: default_log_buffer_size(),
        }
    }
}

impl Settings {
    /// Load from the optional config file and `TALENT_BOARD__*` variables
    pub fn new() -> Result<Self, SettingsError> {
        let config_path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.api_url.is_empty() {
            return Err(SettingsError::Invalid {
                field: "api_url",
                reason: "is required".to_string(),
            });
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(SettingsError::Invalid {
                field: "api_url",
                reason: format!("must be an HTTP(S) URL, got {:?}", self.api_url),
            });
        }
        if self.log_buffer_size == 0 {
            return Err(SettingsError::Invalid {
                field: "log_buffer_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
