//! Road network configuration for routeplan
//!
//! A network is described by a TOML file and turned into a [`RoadNetwork`]
//! before any query runs. Discovery order:
//! 1. An explicit path (the `--network` flag or `ROUTEPLAN_NETWORK`)
//! 2. `routeplan.toml` in the working directory
//! 3. `network.toml` in the user config directory (`~/.config/routeplan/`,
//!    overridable with `ROUTEPLAN_CONFIG_DIR`)

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RouteError};
use crate::graph::{Distance, RoadNetwork};

pub use types::{NetworkConfig, QueryConfig, RoadConfig};

pub const LOCAL_NETWORK_FILE: &str = "routeplan.toml";
const CONFIG_DIR: &str = "routeplan";
const CONFIG_FILE: &str = "network.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROUTEPLAN_CONFIG_DIR";

impl NetworkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RouteError::invalid_network(path, format!("failed to read: {}", e))
        })?;
        toml::from_str(&content).map_err(|e| RouteError::invalid_network(path, e))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Locate and load the network file
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(PathBuf, Self)> {
        let path = resolve_network_path(explicit, cwd)?;
        tracing::debug!(path = %path.display(), "network_file");
        let config = Self::load(&path)?;
        Ok((path, config))
    }

    /// Build the network: declared locations first, then roads in file order
    pub fn build(&self) -> Result<RoadNetwork> {
        let mut network = RoadNetwork::new();
        for location in &self.locations {
            network.declare_location(location);
        }
        for road in &self.roads {
            network.add_road(&road.from, &road.to, Distance::new(road.distance))?;
        }

        tracing::debug!(
            locations = network.location_count(),
            roads = self.roads.len(),
            "network_built"
        );
        Ok(network)
    }

    /// Locate, load and build the network, attributing build errors to the file
    pub fn discover_network(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> Result<(PathBuf, Self, RoadNetwork)> {
        let (path, config) = Self::discover(explicit, cwd)?;
        let network = config
            .build()
            .map_err(|e| RouteError::invalid_network(&path, e))?;
        Ok((path, config, network))
    }
}

fn user_config_dir() -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        return Some(PathBuf::from(env_dir));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR))
}

/// Resolve which network file to use without reading it
pub fn resolve_network_path(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let resolved = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        if resolved.is_file() {
            return Ok(resolved);
        }
        return Err(RouteError::NetworkNotFound {
            searched: vec![resolved],
        });
    }

    let mut searched = vec![cwd.join(LOCAL_NETWORK_FILE)];
    if let Some(dir) = user_config_dir() {
        searched.push(dir.join(CONFIG_FILE));
    }

    match searched.iter().find(|p| p.is_file()) {
        Some(found) => Ok(found.clone()),
        None => Err(RouteError::NetworkNotFound { searched }),
    }
}
