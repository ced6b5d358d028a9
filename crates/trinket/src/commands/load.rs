//! `load`: fill the store from the configured source and show the result.

use tracing::{debug, info};

use trinket_core::Store;

use crate::cli::{GlobalOpts, LoadArgs, LoadCommand};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub async fn handle(args: LoadArgs, config: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let format = config::resolve_output(global, config)?;
    let source = config::resolve_source(global, config);
    let store = Store::new(source.to_simulated_api());

    debug!(command = ?args.command, latency = ?source.latency(), "loading");

    let result = match args.command {
        LoadCommand::Widgets => store.load_widgets().await.map(drop),
        LoadCommand::Weebles => store.load_weebles().await.map(drop),
        LoadCommand::All { concurrent: false } => store.load_all().await.map(drop),
        LoadCommand::All { concurrent: true } => store.load_all_concurrent().await.map(drop),
    };

    debug!(
        widget_calls = store.access().widget_calls(),
        weeble_calls = store.access().weeble_calls(),
        "load finished"
    );

    if let Err(err) = result {
        if !store.state().is_empty() {
            info!(
                widgets = store.widget_count(),
                weebles = store.weeble_count(),
                "store left partially loaded"
            );
        }
        return Err(err.into());
    }

    let out = output::render_state(format, &store.state())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
