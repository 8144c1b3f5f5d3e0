use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for routeplan with network discovery isolated from the host
pub fn routeplan() -> Command {
    let mut cmd = cargo_bin_cmd!("routeplan");
    cmd.env_remove("ROUTEPLAN_NETWORK").env_remove("ROUTEPLAN_LOG");
    cmd
}

pub const ETHIOPIA: &str = r#"
name = "Ethiopian Cities Road Network"
locations = ["Addis Ababa", "Bahir Dar", "Gondar", "Hawassa", "Mekelle"]

[[roads]]
from = "Addis Ababa"
to = "Bahir Dar"
distance = 510

[[roads]]
from = "Addis Ababa"
to = "Hawassa"
distance = 275

[[roads]]
from = "Bahir Dar"
to = "Gondar"
distance = 180

[[roads]]
from = "Gondar"
to = "Mekelle"
distance = 300
"#;

/// Write a network file into `dir` and return its path
pub fn write_network(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
