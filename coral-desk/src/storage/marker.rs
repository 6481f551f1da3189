//! Single-value marker files
//!
//! A marker is one JSON string at a fixed path (the session email, the
//! email awaiting verification). Absent file means no marker.

use super::store::StoreResult;
use std::path::Path;

/// Read a marker. Returns `None` when the file does not exist.
pub fn read(path: &Path) -> StoreResult<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Write a marker, creating the parent directory if needed.
pub fn write(path: &Path, value: &str) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string(value)?)?;
    Ok(())
}

/// Remove a marker. A missing file is not an error.
pub fn clear(path: &Path) -> StoreResult<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
