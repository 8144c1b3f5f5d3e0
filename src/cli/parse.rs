use routeplan_core::format::OutputFormat;
use routeplan_core::graph::{RoadChange, Strategy};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse search strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse a road closure (FROM,TO)
pub fn parse_close(s: &str) -> std::result::Result<RoadChange, String> {
    RoadChange::parse_close(s).map_err(|e| e.to_string())
}

/// Parse an added road (FROM,TO,DISTANCE)
pub fn parse_add_road(s: &str) -> std::result::Result<RoadChange, String> {
    RoadChange::parse_add(s).map_err(|e| e.to_string())
}

/// Parse a reroute (FROM,TO,DISTANCE)
pub fn parse_reroute(s: &str) -> std::result::Result<RoadChange, String> {
    RoadChange::parse_reroute(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("records").unwrap(), OutputFormat::Records);
        assert!(parse_format("yaml").unwrap_err().contains("unknown format"));
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(parse_strategy("DFS").unwrap(), Strategy::Dfs);
        assert!(parse_strategy("astar")
            .unwrap_err()
            .contains("unknown strategy 'astar'"));
    }

    #[test]
    fn test_parse_close_error_message() {
        let err = parse_close("Gondar").unwrap_err();
        assert!(err.contains("FROM,TO"));
    }
}
