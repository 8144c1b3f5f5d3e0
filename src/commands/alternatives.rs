//! `routeplan alternatives`: k best-cost routes by road blocking
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::LoadedNetwork;
use crate::commands::output::{self, human, json, records};
use routeplan_core::error::Result;
use routeplan_core::graph::k_shortest_paths;

pub fn execute(
    cli: &Cli,
    loaded: &LoadedNetwork,
    start: &str,
    goal: &str,
    k: usize,
) -> Result<()> {
    let routes = k_shortest_paths(&loaded.network, start, goal, k)?;

    match cli.format {
        OutputFormat::Human => human::output_routes(cli, &routes, start, goal),
        OutputFormat::Json => json::output_routes(&routes, start, goal, k)?,
        OutputFormat::Records => {
            let header = output::records_header(
                loaded,
                "alternatives",
                &[
                    ("start", start.to_string()),
                    ("goal", goal.to_string()),
                    ("k", k.to_string()),
                    ("routes", routes.len().to_string()),
                ],
            );
            records::output_routes(&header, &routes);
        }
    }
    Ok(())
}
