//! Core domain logic for Placemark.
//! This crate is the single source of truth for saved-place invariants.

pub mod auth;
pub mod logging;
pub mod model;
pub mod nearby;
pub mod session;
pub mod store;

pub use auth::{AuthError, DeviceAuthenticator, PromptOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::location::{Coordinate, Location, LocationId, DEFAULT_LOCATION_NAME};
pub use nearby::{NearbyItem, NearbySearch, SearchError, WikipediaClient};
pub use session::edit_session::{EditSession, LoadingState};
pub use store::{LocationStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
