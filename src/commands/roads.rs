//! `routeplan roads`: list the network the other commands would query
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::LoadedNetwork;
use crate::commands::output::{self, human, json, records};
use routeplan_core::error::Result;

pub fn execute(cli: &Cli, loaded: &LoadedNetwork) -> Result<()> {
    let network = &loaded.network;
    let locations = network.locations();
    let roads = network.roads();
    let label = output::network_label(loaded);

    match cli.format {
        OutputFormat::Human => human::output_roads(cli, &label, locations, &roads),
        OutputFormat::Json => json::output_roads(&label, locations, &roads)?,
        OutputFormat::Records => {
            let header = output::records_header(
                loaded,
                "roads",
                &[
                    ("locations", locations.len().to_string()),
                    ("roads", roads.len().to_string()),
                ],
            );
            records::output_roads(&header, locations, &roads);
        }
    }
    Ok(())
}
