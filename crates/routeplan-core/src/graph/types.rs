use crate::error::RouteError;
use serde::{Deserialize, Serialize, Serializer};

/// A named node in the road network
pub type Location = String;

/// Cumulative or per-road distance.
///
/// Unreachable results carry [`Distance::UNREACHABLE`] (positive infinity),
/// which serializes as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const UNREACHABLE: Distance = Distance(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order used by priority frontiers
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Distance {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl From<u32> for Distance {
    fn from(value: u32) -> Self {
        Distance(value as f64)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.0.is_finite() {
            write!(f, "inf")
        } else if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Frontier discipline for uninformed search and sweeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Cost-ordered breadth-first search (sweeps use a plain FIFO queue)
    #[default]
    Bfs,
    /// Stack-ordered depth-first search following neighbor list order
    Dfs,
}

impl std::str::FromStr for Strategy {
    type Err = RouteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            _ => Err(RouteError::InvalidStrategy(s.to_string())),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
        }
    }
}

/// Path result
///
/// An empty `path` with an unreachable `cost` means the goal was not reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub path: Vec<Location>,
    pub cost: Distance,
}

impl Route {
    pub fn new(path: Vec<Location>, cost: Distance) -> Self {
        Route { path, cost }
    }

    pub fn unreachable() -> Self {
        Route {
            path: Vec::new(),
            cost: Distance::UNREACHABLE,
        }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Consecutive location pairs along the path, i.e. the roads to highlight
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

/// Result of a reachability sweep.
///
/// `cost` sums the weight of the road used to first reach each location, so
/// it depends on traversal order and is not a shortest-path quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub path: Vec<Location>,
    pub cost: Distance,
    pub visit_order: Vec<Location>,
}

/// Outcome of an uninformed search request
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Start-to-goal search; the route may be unreachable
    Path(Route),
    /// Exhaustive visit; `None` when no path covers every location
    Tour(Option<Route>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_addition() {
        let sum = Distance::from(510) + Distance::from(180);
        assert_eq!(sum.value(), 690.0);
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::from(990).to_string(), "990");
        assert_eq!(Distance::new(2.5).to_string(), "2.5");
        assert_eq!(Distance::UNREACHABLE.to_string(), "inf");
    }

    #[test]
    fn test_unreachable_serializes_as_null() {
        let json = serde_json::to_value(Route::unreachable()).unwrap();
        assert!(json["cost"].is_null());
        assert_eq!(json["path"], serde_json::json!([]));
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::Bfs);
        assert_eq!("DFS".parse::<Strategy>().unwrap(), Strategy::Dfs);
        assert!(matches!(
            "greedy".parse::<Strategy>(),
            Err(RouteError::InvalidStrategy(s)) if s == "greedy"
        ));
    }

    #[test]
    fn test_route_legs() {
        let route = Route::new(
            vec!["A".to_string(), "B".to_string(), "G".to_string()],
            Distance::from(690),
        );
        let legs: Vec<_> = route.legs().collect();
        assert_eq!(legs, vec![("A", "B"), ("B", "G")]);
        assert!(route.found());
        assert!(!Route::unreachable().found());
    }
}
