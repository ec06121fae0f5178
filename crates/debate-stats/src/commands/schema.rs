//! Schema command: JSON schema of the analysis report.

use clap::Args;
use tracing::{debug, instrument};

use debate_stats_core::analysis::DebateReport;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON schema of `analyze --json` output.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");
    let schema = schemars::schema_for!(DebateReport);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
