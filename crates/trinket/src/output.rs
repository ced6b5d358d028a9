//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders store snapshots in the format selected by `--output`. Table uses
//! `tabled`, structured formats use serde, plain emits one item per line.

use std::io::{self, Write};

use serde_json::Value;
use tabled::{Table, Tabled, settings::Style};

use trinket_core::StoreState;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// One stored item, as shown in table output.
#[derive(Debug, Tabled)]
struct ItemRow {
    #[tabled(rename = "Collection")]
    collection: &'static str,
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Item")]
    item: String,
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a store snapshot in the chosen format.
///
/// - `table`: one row per item, widgets first
/// - `json` / `json-compact` / `yaml`: `{ widgets: [...], weebles: [...] }`
/// - `plain`: `<collection>\t<item>` per line
pub fn render_state(
    format: OutputFormat,
    state: &StoreState<Value, Value>,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(render_table(&rows(state))),
        OutputFormat::Json => render_json(state, false),
        OutputFormat::JsonCompact => render_json(state, true),
        OutputFormat::Yaml => render_yaml(state),
        OutputFormat::Plain => Ok(rows(state)
            .iter()
            .map(|r| format!("{}\t{}", r.collection, r.item))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn rows(state: &StoreState<Value, Value>) -> Vec<ItemRow> {
    let widgets = state.widgets.iter().enumerate().map(|(index, item)| ItemRow {
        collection: "widgets",
        index,
        item: display_item(item),
    });
    let weebles = state.weebles.iter().enumerate().map(|(index, item)| ItemRow {
        collection: "weebles",
        index,
        item: display_item(item),
    });
    widgets.chain(weebles).collect()
}

/// Strings are shown bare; everything else as compact JSON.
fn display_item(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Pretty-printed or compact JSON.
pub(crate) fn render_json<T: serde::Serialize + ?Sized>(
    data: &T,
    compact: bool,
) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(rendered)
}

/// YAML output.
pub(crate) fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}
