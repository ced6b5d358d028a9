//! CLI configuration — thin wrapper around `trinket_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--config, --output, --latency-ms).

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use trinket_config::{Config, Source};

// ── CLI-specific helpers ────────────────────────────────────────────

/// The config file in effect: `--config` / `TRINKET_CONFIG`, else the
/// platform default.
pub fn resolve_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(trinket_config::config_path)
}

/// Load the config file in effect.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let cfg = match global.config {
        Some(ref path) => trinket_config::load_config_from(path)?,
        None => trinket_config::load_config()?,
    };
    Ok(cfg)
}

/// Write `cfg` to the config file in effect.
pub fn save(global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    match global.config {
        Some(ref path) => trinket_config::save_config_to(cfg, path)?,
        None => trinket_config::save_config(cfg)?,
    }
    Ok(())
}

/// Output format: flag > env > config `defaults.output`.
pub fn resolve_output(global: &GlobalOpts, config: &Config) -> Result<OutputFormat, CliError> {
    if let Some(format) = global.output {
        return Ok(format);
    }
    OutputFormat::from_str(&config.defaults.output, true).map_err(|reason| CliError::Validation {
        field: "defaults.output".into(),
        reason,
    })
}

/// The `[source]` section with flag overrides applied.
pub fn resolve_source(global: &GlobalOpts, config: &Config) -> Source {
    let mut source = config.source.clone();
    if let Some(latency_ms) = global.latency_ms {
        source.latency_ms = latency_ms;
    }
    source
}
