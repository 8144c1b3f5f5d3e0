use crate::error::Result;
use crate::graph::algos::dijkstra::MinCostFrontier;
use crate::graph::algos::frontier::{search, StackFrontier};
use crate::graph::algos::tour::visit_all_locations;
use crate::graph::types::{Route, SearchOutcome, Strategy};
use crate::graph::RoadGraph;

/// Breadth-first search ordered by cumulative cost.
///
/// Expands the cheapest frontier entry first, so the returned route is
/// always a minimum-cost one.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn bfs_find_path(graph: &dyn RoadGraph, start: &str, goal: &str) -> Route {
    search(graph, start, goal, MinCostFrontier::new())
}

/// Depth-first search following each location's neighbor list order.
///
/// Returns the first route that reaches the goal, which need not be the
/// cheapest one.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn dfs_find_path(graph: &dyn RoadGraph, start: &str, goal: &str) -> Route {
    search(graph, start, goal, StackFrontier::default())
}

pub fn find_path(graph: &dyn RoadGraph, start: &str, goal: &str, strategy: Strategy) -> Route {
    match strategy {
        Strategy::Bfs => bfs_find_path(graph, start, goal),
        Strategy::Dfs => dfs_find_path(graph, start, goal),
    }
}

/// Uninformed search entry point taking an unparsed strategy selector.
///
/// The selector is validated before any traversal. With `visit_all` set the
/// goal is ignored and an exhaustive single-visit tour from `start` is
/// attempted instead.
pub fn explore(
    graph: &dyn RoadGraph,
    start: &str,
    goal: &str,
    strategy: &str,
    visit_all: bool,
) -> Result<SearchOutcome> {
    let strategy: Strategy = strategy.parse()?;

    if visit_all {
        tracing::debug!(%strategy, "visit_all_requested");
        return Ok(SearchOutcome::Tour(visit_all_locations(graph, start)));
    }

    Ok(SearchOutcome::Path(find_path(graph, start, goal, strategy)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::graph::algos::fixtures::{five_city_network, with_direct_road};
    use crate::graph::algos::shortest_path;
    use crate::graph::types::Distance;
    use crate::graph::RoadNetwork;

    #[test]
    fn test_bfs_matches_shortest_path() {
        let net = with_direct_road(five_city_network(), 1200);
        let bfs = bfs_find_path(&net, "A", "M");

        assert_eq!(bfs, shortest_path(&net, "A", "M"));
        assert_eq!(bfs.path, vec!["A", "B", "G", "M"]);
        assert_eq!(bfs.cost, Distance::from(990));
    }

    #[test]
    fn test_dfs_single_route() {
        let net = five_city_network();
        let route = dfs_find_path(&net, "A", "M");

        assert_eq!(route.path, vec!["A", "B", "G", "M"]);
        assert_eq!(route.cost, Distance::from(990));
    }

    #[test]
    fn test_dfs_follows_list_order_not_cost() {
        // A lists B first, so DFS takes the expensive B route
        let mut net = RoadNetwork::new();
        net.add_road("A", "B", Distance::from(100)).unwrap();
        net.add_road("A", "C", Distance::from(1)).unwrap();
        net.add_road("B", "D", Distance::from(100)).unwrap();
        net.add_road("C", "D", Distance::from(1)).unwrap();

        let dfs = dfs_find_path(&net, "A", "D");
        assert_eq!(dfs.path, vec!["A", "B", "D"]);
        assert_eq!(dfs.cost, Distance::from(200));

        let bfs = bfs_find_path(&net, "A", "D");
        assert_eq!(bfs.path, vec!["A", "C", "D"]);
        assert!(bfs.cost <= dfs.cost);
    }

    #[test]
    fn test_dfs_unreachable_after_road_removal() {
        let mut net = five_city_network();
        net.remove_road("B", "G");

        let route = dfs_find_path(&net, "A", "M");
        assert!(!route.found());
        assert_eq!(route.cost, Distance::UNREACHABLE);
    }

    #[test]
    fn test_shortest_never_worse_than_dfs() {
        let net = with_direct_road(five_city_network(), 800);
        for (start, goal) in [("A", "M"), ("H", "M"), ("M", "H"), ("B", "H")] {
            let dfs = dfs_find_path(&net, start, goal);
            let best = shortest_path(&net, start, goal);
            assert!(best.cost <= dfs.cost, "{start}->{goal}");
        }
    }

    #[test]
    fn test_start_equals_goal_both_strategies() {
        let net = five_city_network();
        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let route = find_path(&net, "H", "H", strategy);
            assert_eq!(route.path, vec!["H"]);
            assert_eq!(route.cost, Distance::ZERO);
        }
    }

    #[test]
    fn test_unknown_goal_is_unreachable() {
        let net = five_city_network();
        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            assert_eq!(
                find_path(&net, "A", "Nowhere", strategy),
                Route::unreachable()
            );
        }
    }

    #[test]
    fn test_explore_rejects_unknown_strategy() {
        let net = five_city_network();
        let err = explore(&net, "A", "M", "astar", false).unwrap_err();
        assert!(matches!(err, RouteError::InvalidStrategy(s) if s == "astar"));

        // Rejected even when a tour was requested
        assert!(explore(&net, "A", "M", "", true).is_err());
    }

    #[test]
    fn test_explore_path_and_tour() {
        let net = five_city_network();

        match explore(&net, "A", "M", "dfs", false).unwrap() {
            SearchOutcome::Path(route) => assert_eq!(route.cost, Distance::from(990)),
            other => panic!("unexpected outcome: {other:?}"),
        }

        // H and M are both leaves off A's branch, so no single-visit tour exists
        assert_eq!(
            explore(&net, "A", "M", "bfs", true).unwrap(),
            SearchOutcome::Tour(None)
        );
    }
}
