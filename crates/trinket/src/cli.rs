//! Clap derive structures for the `trinket` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// trinket -- load widgets and weebles through an asynchronous store
#[derive(Debug, Parser)]
#[command(
    name = "trinket",
    version,
    about = "Load widgets and weebles through an asynchronous store",
    long_about = "Drives a widget/weeble store backed by a simulated data source.\n\n\
        Each request to the source settles after a configurable latency, or is\n\
        rejected when the config file says so.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Path to the config file
    #[arg(long, env = "TRINKET_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the config file's `defaults.output`)
    #[arg(long, short = 'o', env = "TRINKET_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Override the simulated source latency, in milliseconds
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one item per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the state of a freshly created store
    State,

    /// Load collections from the data source and show the result
    #[command(alias = "l")]
    Load(LoadArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Load ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoadArgs {
    #[command(subcommand)]
    pub command: LoadCommand,
}

#[derive(Debug, Subcommand)]
pub enum LoadCommand {
    /// Load widgets only
    Widgets,

    /// Load weebles only
    Weebles,

    /// Load widgets, then weebles
    All {
        /// Fetch both collections at the same time instead of in order
        #[arg(long)]
        concurrent: bool,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
