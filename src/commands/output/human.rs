use crate::cli::Cli;
use routeplan_core::graph::{RoadSegment, Route, SweepResult};

/// `A -> B -> C (cost 990)`
pub fn route_line(route: &Route) -> String {
    format!("{} (cost {})", route.path.join(" -> "), route.cost)
}

pub fn output_route(cli: &Cli, route: &Route, start: &str, goal: &str) {
    if route.found() {
        println!("{}", route_line(route));
    } else if !cli.quiet {
        println!("No path found from {} to {}", start, goal);
    }
}

pub fn output_tour(cli: &Cli, tour: Option<&Route>, start: &str) {
    match tour {
        Some(route) => println!("{}", route_line(route)),
        None if !cli.quiet => {
            println!("No path visits every location exactly once from {}", start)
        }
        None => {}
    }
}

pub fn output_routes(cli: &Cli, routes: &[Route], start: &str, goal: &str) {
    if routes.is_empty() {
        if !cli.quiet {
            println!("No path found from {} to {}", start, goal);
        }
        return;
    }
    for (i, route) in routes.iter().enumerate() {
        println!("{}. {}", i + 1, route_line(route));
    }
}

pub fn output_sweep(cli: &Cli, result: &SweepResult) {
    println!("Visited: {}", result.visit_order.join(", "));
    if !cli.quiet {
        println!(
            "Last path: {} (sweep cost {})",
            result.path.join(" -> "),
            result.cost
        );
    }
}

pub fn output_roads(cli: &Cli, label: &str, locations: &[String], roads: &[RoadSegment]) {
    if !cli.quiet {
        println!("{}", label);
        println!();
    }
    println!("Locations ({}):", locations.len());
    for location in locations {
        println!("  {}", location);
    }
    println!("Roads ({}):", roads.len());
    for road in roads {
        println!("  {} -- {} ({})", road.from, road.to, road.distance);
    }
}
