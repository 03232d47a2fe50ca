//! I/O helpers for signals and JSON reports.
//!
//! - `load_signal_json`: read a `SignalBuffer` (`times`, `magnitude`,
//!   `vector` as `[x, y, z]` triples) from a JSON file.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The detector itself never touches the filesystem; these are for tools.
use crate::types::SignalBuffer;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a signal from a JSON file.
pub fn load_signal_json(path: &Path) -> Result<SignalBuffer, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read signal {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse signal {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
