use routeplan_core::error::Result;
use routeplan_core::graph::{RoadSegment, Route, SweepResult};
use serde_json::{json, Value};

/// Route object with its legs spelled out
pub fn route_value(route: &Route) -> Value {
    let legs: Vec<Value> = route
        .legs()
        .map(|(from, to)| json!({ "from": from, "to": to }))
        .collect();
    json!({
        "found": route.found(),
        "path": route.path,
        "cost": route.cost,
        "legs": legs,
    })
}

fn print(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn output_route(route: &Route, start: &str, goal: &str, strategy: Option<&str>) -> Result<()> {
    let mut value = json!({ "start": start, "goal": goal });
    if let Some(strategy) = strategy {
        value["strategy"] = json!(strategy);
    }
    value["route"] = route_value(route);
    print(&value)
}

pub fn output_tour(tour: Option<&Route>, start: &str) -> Result<()> {
    print(&json!({
        "start": start,
        "mode": "visit_all",
        "route": tour.map(route_value),
    }))
}

pub fn output_routes(routes: &[Route], start: &str, goal: &str, k: usize) -> Result<()> {
    let values: Vec<Value> = routes.iter().map(route_value).collect();
    print(&json!({
        "start": start,
        "goal": goal,
        "k": k,
        "routes": values,
    }))
}

pub fn output_sweep(result: &SweepResult, start: &str, strategy: &str) -> Result<()> {
    print(&json!({
        "start": start,
        "strategy": strategy,
        "visit_order": result.visit_order,
        "path": result.path,
        "cost": result.cost,
    }))
}

pub fn output_roads(label: &str, locations: &[String], roads: &[RoadSegment]) -> Result<()> {
    print(&json!({
        "name": label,
        "locations": locations,
        "roads": roads,
    }))
}
