//! `state`: show what a brand-new store holds before any load.

use serde_json::Value;

use trinket_core::Store;

use crate::cli::GlobalOpts;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub fn handle(config: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let format = config::resolve_output(global, config)?;
    let store = Store::<Value, Value>::detached();

    let out = output::render_state(format, &store.state())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
