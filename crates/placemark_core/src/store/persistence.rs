//! Whole-file JSON codec for the places file.
//!
//! # Responsibility
//! - Read and decode the full collection from one file.
//! - Overwrite the file atomically on save.
//!
//! # Invariants
//! - A save either lands completely or leaves the prior file intact; a
//!   partially written places file is never observable.
//! - The on-disk shape is a bare JSON array of location objects.

use crate::model::location::Location;
use crate::store::StoreResult;
use std::fs;
use std::path::Path;

/// Reads and decodes the persisted collection.
///
/// Callers decide what a failure means; the store treats every error here as
/// "start empty".
pub(crate) fn load_locations(path: &Path) -> StoreResult<Vec<Location>> {
    let bytes = fs::read(path)?;
    let locations = serde_json::from_slice(&bytes)?;
    Ok(locations)
}

/// Serializes the full collection and atomically replaces the places file.
///
/// Writes a sibling temp file first and renames it over the target; rename
/// within one directory is atomic on the platforms we run on.
pub(crate) fn save_locations(path: &Path, locations: &[Location]) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let encoded = serde_json::to_vec(locations)?;
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, encoded)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
