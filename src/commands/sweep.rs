//! `routeplan sweep`: visit everything reachable from a start location
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::LoadedNetwork;
use crate::commands::output::{self, human, json, records};
use routeplan_core::error::Result;
use routeplan_core::graph::{sweep, Strategy};

pub fn execute(
    cli: &Cli,
    loaded: &LoadedNetwork,
    start: &str,
    strategy: Strategy,
) -> Result<()> {
    let result = sweep(&loaded.network, start, strategy);

    match cli.format {
        OutputFormat::Human => human::output_sweep(cli, &result),
        OutputFormat::Json => json::output_sweep(&result, start, &strategy.to_string())?,
        OutputFormat::Records => {
            let header = output::records_header(
                loaded,
                "sweep",
                &[
                    ("strategy", strategy.to_string()),
                    ("start", start.to_string()),
                    ("visited", result.visit_order.len().to_string()),
                ],
            );
            records::output_sweep(&header, &result);
        }
    }
    Ok(())
}
