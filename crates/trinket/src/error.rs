//! CLI error types with miette diagnostics.
//!
//! Maps source rejections and config failures into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use trinket_config::ConfigError;
use trinket_core::ApiError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const SOURCE: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Data source ──────────────────────────────────────────────────
    #[error("Loading {resource} failed: {message}")]
    #[diagnostic(
        code(trinket::source_rejected),
        help(
            "The data source rejected the {resource} request.\n\
             Check `fail_{resource}` under [source] in: trinket config show"
        )
    )]
    SourceRejected { resource: String, message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(trinket::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(trinket::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error("Could not load configuration: {0}")]
    #[diagnostic(
        code(trinket::config),
        help("Locate the file in use with: trinket config path")
    )]
    Config(#[source] ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(trinket::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(trinket::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to render TOML: {0}")]
    #[diagnostic(code(trinket::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SourceRejected { .. } => exit_code::SOURCE,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        CliError::SourceRejected {
            resource: err.resource().to_string(),
            message: err.message().to_owned(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config(other),
        }
    }
}
