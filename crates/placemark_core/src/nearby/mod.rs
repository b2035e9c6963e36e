//! Nearby encyclopedia lookup contracts.
//!
//! # Responsibility
//! - Define the search API the edit session consumes.
//! - Keep the session testable against stub search backends.
//!
//! # Invariants
//! - Results carry a deterministic order: ascending `(title, page_id)`.
//! - A lookup either yields a complete result set or an error; partial
//!   results are never returned.

use crate::model::location::Coordinate;
use async_trait::async_trait;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod wikipedia;

pub use wikipedia::WikipediaClient;

/// One encyclopedia entry near a place. Session-scoped, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbyItem {
    /// Numeric page identifier from the upstream API.
    pub page_id: u64,
    pub title: String,
    pub description: String,
}

// The upstream API returns an unordered page map, so the display order has
// to be pinned here: title first, numeric page id as the tie-break.
impl Ord for NearbyItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then(self.page_id.cmp(&other.page_id))
    }
}

impl PartialOrd for NearbyItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Failure of one nearby lookup. Both variants collapse to the session's
/// terminal Failed state; no retry is attempted.
#[derive(Debug)]
pub enum SearchError {
    Http(reqwest::Error),
    Decode(serde_json::Error),
    BadUrl(url::ParseError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "nearby search request failed: {err}"),
            Self::Decode(err) => write!(f, "nearby search response invalid: {err}"),
            Self::BadUrl(err) => write!(f, "nearby search url invalid: {err}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::BadUrl(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<url::ParseError> for SearchError {
    fn from(value: url::ParseError) -> Self {
        Self::BadUrl(value)
    }
}

/// Search backend for entries near a coordinate.
///
/// Implementations own the ordering contract: the returned vector is already
/// sorted ascending by `(title, page_id)`.
#[async_trait]
pub trait NearbySearch: Send + Sync {
    async fn search_nearby(&self, coordinate: Coordinate) -> Result<Vec<NearbyItem>, SearchError>;
}
