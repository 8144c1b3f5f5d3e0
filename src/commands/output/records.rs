use routeplan_core::format::record_value;
use routeplan_core::graph::{RoadSegment, Route, SweepResult};

fn joined(locations: &[String]) -> String {
    locations
        .iter()
        .map(|loc| record_value(loc))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `P` line followed by one `E` line per leg; nothing for an unreachable route
pub fn route_lines(index: usize, route: &Route) -> Vec<String> {
    if !route.found() {
        return Vec::new();
    }
    let mut lines = vec![format!(
        "P {} cost={} {}",
        index,
        route.cost,
        joined(&route.path)
    )];
    lines.extend(route.legs().map(|(from, to)| {
        format!("E {} {} {}", index, record_value(from), record_value(to))
    }));
    lines
}

pub fn output_routes(header: &str, routes: &[Route]) {
    println!("{}", header);
    for (i, route) in routes.iter().enumerate() {
        for line in route_lines(i + 1, route) {
            println!("{}", line);
        }
    }
}

pub fn output_sweep(header: &str, result: &SweepResult) {
    println!("{}", header);
    for (i, location) in result.visit_order.iter().enumerate() {
        println!("V {} {}", i + 1, record_value(location));
    }
    println!("P 1 cost={} {}", result.cost, joined(&result.path));
}

pub fn output_roads(header: &str, locations: &[String], roads: &[RoadSegment]) {
    println!("{}", header);
    for location in locations {
        println!("L {}", record_value(location));
    }
    for road in roads {
        println!(
            "R {} {} {}",
            record_value(&road.from),
            record_value(&road.to),
            road.distance
        );
    }
}
