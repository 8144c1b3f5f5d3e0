//! `routeplan path`: uninformed search or an exhaustive tour
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::LoadedNetwork;
use crate::commands::output::{self, human, json, records};
use routeplan_core::bail_usage;
use routeplan_core::error::Result;
use routeplan_core::graph::{explore, SearchOutcome, Strategy};

pub fn execute(
    cli: &Cli,
    loaded: &LoadedNetwork,
    start: &str,
    goal: Option<&str>,
    strategy: Strategy,
    visit_all: bool,
) -> Result<()> {
    // A tour ignores the goal
    let goal = match goal {
        Some(goal) => goal,
        None if visit_all => "",
        None => bail_usage!("path requires a GOAL unless --visit-all is given"),
    };

    let strategy = strategy.to_string();
    let outcome = explore(&loaded.network, start, goal, &strategy, visit_all)?;

    match outcome {
        SearchOutcome::Path(route) => match cli.format {
            OutputFormat::Human => human::output_route(cli, &route, start, goal),
            OutputFormat::Json => json::output_route(&route, start, goal, Some(&strategy))?,
            OutputFormat::Records => {
                let header = output::records_header(
                    loaded,
                    "path",
                    &[
                        ("strategy", strategy.clone()),
                        ("start", start.to_string()),
                        ("goal", goal.to_string()),
                        ("found", route.found().to_string()),
                    ],
                );
                records::output_routes(&header, std::slice::from_ref(&route));
            }
        },
        SearchOutcome::Tour(tour) => match cli.format {
            OutputFormat::Human => human::output_tour(cli, tour.as_ref(), start),
            OutputFormat::Json => json::output_tour(tour.as_ref(), start)?,
            OutputFormat::Records => {
                let header = output::records_header(
                    loaded,
                    "tour",
                    &[
                        ("start", start.to_string()),
                        ("found", tour.is_some().to_string()),
                    ],
                );
                let routes: Vec<_> = tour.into_iter().collect();
                records::output_routes(&header, &routes);
            }
        },
    }
    Ok(())
}
