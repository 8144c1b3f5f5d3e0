//! Output rendering shared by the query commands
//!
//! Each format lives in its own module; commands pick one by `cli.format`.

pub mod human;
pub mod json;
pub mod records;

use crate::commands::dispatch::LoadedNetwork;
use routeplan_core::format::record_value;

/// Display name of a loaded network: its `name` field or the file stem
pub fn network_label(loaded: &LoadedNetwork) -> String {
    loaded
        .config
        .name
        .clone()
        .or_else(|| {
            loaded
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "network".to_string())
}

/// Build the records header line
pub fn records_header(loaded: &LoadedNetwork, mode: &str, fields: &[(&str, String)]) -> String {
    let mut header = format!(
        "H routeplan=1 records=1 network={} mode={}",
        record_value(&network_label(loaded)),
        mode
    );
    for (key, value) in fields {
        header.push_str(&format!(" {}={}", key, record_value(value)));
    }
    header
}
