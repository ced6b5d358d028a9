mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(log_level(cli.global.verbose, cli.global.quiet));

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Default log level for the given `-v` count. `RUST_LOG` still wins.
fn log_level(verbosity: u8, quiet: bool) -> &'static str {
    match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

fn init_tracing(level: &str) {
    // stdout carries rendered snapshots only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Completions(args) => {
            print_completions(args.shell);
            Ok(())
        }
        // `config init` must work when the current file is unreadable
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),
        cmd => {
            let config = config::load(&cli.global)?;
            tracing::debug!(command = ?cmd, "running store command");
            commands::dispatch(cmd, &config, &cli.global).await
        }
    }
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "trinket", &mut std::io::stdout());
}
