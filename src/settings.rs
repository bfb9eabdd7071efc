use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use common::DEFAULT_ENDPOINT;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Base name of the optional settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "aqi-predictor";

/// Runtime settings of the command line client.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// URL the readings are posted to.
    pub endpoint: String,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Overall request timeout. Unset means the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Overrides the endpoint when one was given on the command line.
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Load settings from defaults, then a TOML file, then `AQI_*` variables.
///
/// An explicit `config_path` must exist; the default file is optional.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let builder = Config::builder()
        .set_default("endpoint", DEFAULT_ENDPOINT)?
        .set_default("log_level", "warn")?;

    let builder = match config_path {
        Some(path) => builder.add_source(File::from(path).required(true)),
        None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
    };

    let settings = builder
        .add_source(Environment::with_prefix("AQI").try_parsing(true))
        .build()
        .context("Failed to load configuration")?
        .try_deserialize::<Settings>()
        .context("Invalid configuration")?;

    Ok(settings)
}
