//! Location store: the authoritative collection and its persistence.
//!
//! # Responsibility
//! - Own the ordered location collection and the unlock flag.
//! - Be the sole writer of the persisted places file.
//!
//! # Invariants
//! - Ids are unique within the collection at all times.
//! - Iteration order is insertion order, never a sort order.
//! - Load failure falls back to an empty collection; it is never surfaced.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod location_store;
mod persistence;

pub use location_store::LocationStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for the places file.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "places file i/o failed: {err}"),
            Self::Encode(err) => write!(f, "places encoding failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}
