//! Command dispatch: bridges CLI args -> store operations -> output formatting.

pub mod config_cmd;
pub mod load;
pub mod state;

use crate::cli::{Command, GlobalOpts};
use crate::config::Config;
use crate::error::CliError;

/// Dispatch a store-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, config: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::State => state::handle(config, global),
        Command::Load(args) => load::handle(args, config, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
