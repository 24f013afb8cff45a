use anyhow::{anyhow, Result};
use serde_derive::Deserialize;
use std::str::FromStr;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load AppConfig: {}", err)),
    }
}

fn default_interval_sec() -> u64 {
    3600
}

fn default_timeout_sec() -> u64 {
    10
}

#[derive(Deserialize, Debug)]
pub struct PollConfig {
    #[serde(default = "default_interval_sec")]
    pub interval_sec: u64,
    // upper bound for one refresh cycle, including any silent reauthentication
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
}

pub fn load_poll_config() -> Result<PollConfig> {
    match envy::prefixed("POLL_").from_env::<PollConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load PollConfig: {}", err)),
    }
}

#[derive(Deserialize, Debug)]
pub struct PortalConfig {
    pub username: String,
    pub password: String,
    // overrides the production portal URL; set by tests and the odd proxy setup
    pub base_url: Option<String>,
}

pub(crate) fn load_portal_config() -> Result<PortalConfig> {
    match envy::prefixed("UNITEDCONSUMERS_").from_env::<PortalConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load PortalConfig: {}", err)),
    }
}
