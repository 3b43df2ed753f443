//! # Settings Module
//!
//! ## Purpose
//! Persistent configuration of KiMKM, stored as JSON next to the binary (`mkm_settings.json`).
//! A missing file means default settings, so the tool works out of the box.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "endpoint": "https://api.catalysis-hub.org/graphql",
//!   "page_size": 100,
//!   "output_file": "input_file.mkm",
//!   "log_level": "info",
//!   "log_file": null
//! }
//! ```
//!
//! ## Usage Pattern
//! ```rust, ignore
//! use KiMKM::settings::Settings;
//!
//! let mut settings = Settings::load("mkm_settings.json")?;
//! settings.page_size = 50;
//! settings.save("mkm_settings.json")?;
//! ```
use crate::ReactionDB::catalysis_hub_api::{CATALYSIS_HUB_ENDPOINT, DEFAULT_PAGE_SIZE};
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

pub const SETTINGS_FILE: &str = "mkm_settings.json";
pub const DEFAULT_OUTPUT_FILE: &str = "input_file.mkm";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// GraphQL endpoint of the reaction database
    pub endpoint: String,
    /// reactions per request
    pub page_size: usize,
    /// where the input file goes when no path is given
    pub output_file: String,
    /// off, error, warn, info, debug, trace
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: CATALYSIS_HUB_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file, defaults if the file does not exist.
    ///
    /// Fields absent from the file take their default values. A file that exists but cannot be
    /// read or parsed is an error, it is never silently replaced.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(
                "settings file '{}' not found, default settings used",
                path.display()
            );
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.endpoint()?;
        self.level_filter()?;
        Ok(())
    }

    pub fn endpoint(&self) -> Result<Url, SettingsError> {
        Ok(Url::parse(&self.endpoint)?)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| SettingsError::LogLevel(self.log_level.clone()))
    }
}
