//! Location domain model.
//!
//! # Responsibility
//! - Define the persistent record for one geolocated point of interest.
//! - Provide the identity-based equality used by store lookups.
//!
//! # Invariants
//! - `id` is unique within a store's collection at all times.
//! - Coordinates are fixed at creation and never edited afterwards.
//! - `==` compares identifiers only; two records with equal content but
//!   different ids are distinct records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a saved place.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type LocationId = Uuid;

/// Display name assigned to every freshly created place.
pub const DEFAULT_LOCATION_NAME: &str = "New location";

/// Geographic point produced by the map layer (a tap, in practice).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Persistent record for one annotated point of interest.
///
/// Serialized shape matches the on-disk JSON array element: `id`, `name`,
/// `description`, `latitude`, `longitude`. No versioning field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Stable id for lookup/modify/delete. A successful edit-save replaces
    /// the record with a new one carrying a fresh id.
    pub id: LocationId,
    /// User-editable display name.
    pub name: String,
    /// User-editable free text.
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a record at `coordinate` with a generated id and default
    /// name/description.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: DEFAULT_LOCATION_NAME.to_string(),
            description: String::new(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }

    /// Creates a record with a caller-provided id and content.
    ///
    /// Used by edit-commit paths that mint the replacement record themselves.
    pub fn with_id(
        id: LocationId,
        name: impl Into<String>,
        description: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Field-wise comparison, independent of the identity relation `==`.
    ///
    /// Round-trip checks need this; regular store operations never do.
    pub fn same_content(&self, other: &Location) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.description == other.description
            && self.latitude == other.latitude
            && self.longitude == other.longitude
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}
