use config::{Config, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub juso: JusoSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JusoSettings {
    pub api_url: String,
    pub confm_key: String,
    #[serde(default = "default_first_sort")]
    pub first_sort: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: f64,
    /// Courtesy delay between rows, so the upstream service is not
    /// hammered.
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub enable_json: bool,
}

impl Settings {
    /// Load `appsettings.{environment}` (if present) and apply `APP`
    /// environment overrides, e.g. `APP_JUSO__CONFM_KEY`.
    pub fn load(environment: Environment) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            enable_json: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_first_sort() -> String {
    "location".to_string()
}

fn default_timeout_seconds() -> f64 {
    10.0
}

fn default_throttle_ms() -> u64 {
    80
}

fn default_log_level() -> String {
    "info,sokcho=debug,tower_http=debug".to_string()
}
