//! `routeplan shortest`: minimum-distance path
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::LoadedNetwork;
use crate::commands::output::{self, human, json, records};
use routeplan_core::error::Result;
use routeplan_core::graph::shortest_path;

pub fn execute(cli: &Cli, loaded: &LoadedNetwork, start: &str, goal: &str) -> Result<()> {
    let route = shortest_path(&loaded.network, start, goal);

    match cli.format {
        OutputFormat::Human => human::output_route(cli, &route, start, goal),
        OutputFormat::Json => json::output_route(&route, start, goal, None)?,
        OutputFormat::Records => {
            let header = output::records_header(
                loaded,
                "shortest",
                &[
                    ("start", start.to_string()),
                    ("goal", goal.to_string()),
                    ("found", route.found().to_string()),
                ],
            );
            records::output_routes(&header, std::slice::from_ref(&route));
        }
    }
    Ok(())
}
