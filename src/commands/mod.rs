//! CLI commands for routeplan

pub mod alternatives;
pub mod dispatch;
pub mod output;
pub mod path;
pub mod roads;
pub mod shortest;
pub mod sweep;
