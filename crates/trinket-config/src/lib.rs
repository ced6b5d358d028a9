//! Shared configuration for the trinket tools.
//!
//! TOML file + `TRINKET_`-prefixed environment, and translation of the
//! `[source]` section into a simulated data source for the store. The CLI
//! adds flag-aware overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use trinket_core::SimulatedApi;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// The simulated data source the store loads from.
    #[serde(default)]
    pub source: Source,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}

/// Simulated data source settings.
///
/// Items are arbitrary TOML values; the store never looks inside them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Source {
    /// Delay before every request settles.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    #[serde(default)]
    pub widgets: Vec<Value>,

    #[serde(default)]
    pub weebles: Vec<Value>,

    /// When set, every widget request is rejected with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_widgets: Option<String>,

    /// When set, every weeble request is rejected with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_weebles: Option<String>,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            widgets: vec![1.into(), 2.into(), 3.into()],
            weebles: vec![4.into(), 5.into(), 6.into()],
            fail_widgets: None,
            fail_weebles: None,
        }
    }
}

fn default_latency_ms() -> u64 {
    100
}

impl Source {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Build the simulated data source described by this section.
    pub fn to_simulated_api(&self) -> SimulatedApi<Value> {
        let mut builder = SimulatedApi::builder()
            .widgets(self.widgets.iter().cloned())
            .weebles(self.weebles.iter().cloned())
            .latency(self.latency());

        if let Some(ref message) = self.fail_widgets {
            builder = builder.fail_widgets(message.clone());
        }
        if let Some(ref message) = self.fail_weebles {
            builder = builder.fail_weebles(message.clone());
        }

        builder.build()
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("rs", "trinket", "trinket").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("trinket");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// A missing file is not an error: defaults and environment still apply.
/// Nested keys use a double underscore, e.g.
/// `TRINKET_SOURCE__LATENCY_MS=250`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("TRINKET_").split("__"));

    let config: Config = figment.extract()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    const OUTPUTS: [&str; 5] = ["table", "json", "json-compact", "yaml", "plain"];

    if !OUTPUTS.contains(&config.defaults.output.as_str()) {
        return Err(ConfigError::Validation {
            field: "defaults.output".into(),
            reason: format!(
                "expected one of {}, got '{}'",
                OUTPUTS.join(", "),
                config.defaults.output
            ),
        });
    }
    Ok(())
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Serialize config to TOML and write it to `path`, creating parent
/// directories as needed.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
