//! FFI use-case API for the mobile UI.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Host the one process-wide store instance the UI talks to; the core
//!   itself stays explicitly constructed and test-friendly.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Store mutations commit in memory first, then trigger a persistence
//!   attempt whose failure is logged, never thrown.

use log::error;
use placemark_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Coordinate, EditSession, Location, LocationStore, NearbyItem, NearbySearch, PromptOutcome,
    WikipediaClient,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static STORE: OnceLock<Mutex<LocationStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Opens the process-wide store at `store_path`, loading persisted places.
///
/// Missing or corrupt files start the collection empty by design. Repeat
/// calls with the same path are idempotent; switching paths is rejected.
///
/// # FFI contract
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn open_store(store_path: String) -> String {
    let requested = PathBuf::from(&store_path);
    let store = STORE.get_or_init(|| Mutex::new(LocationStore::open(&requested)));

    let guard = match store.lock() {
        Ok(guard) => guard,
        Err(_) => return "store lock poisoned".to_string(),
    };
    if guard.path() != requested.as_path() {
        return format!(
            "store already opened at `{}`; refusing to switch to `{}`",
            guard.path().display(),
            requested.display()
        );
    }
    String::new()
}

/// Records the outcome of the platform device-auth prompt.
///
/// Returns the unlock flag after the attempt; denial leaves it false so the
/// user stays on the locked screen and may retry.
#[flutter_rust_bridge::frb(sync)]
pub fn unlock_places(prompt_granted: bool) -> bool {
    with_store(|store| store.authenticate(&PromptOutcome(prompt_granted))).unwrap_or(false)
}

/// Current unlock flag.
#[flutter_rust_bridge::frb(sync)]
pub fn is_unlocked() -> bool {
    with_store(|store| store.is_unlocked()).unwrap_or(false)
}

/// Location record mirrored to Dart.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDto {
    /// Stable id in string form.
    pub id: String,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.to_string(),
            name: location.name.clone(),
            description: location.description.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

/// Ordered collection snapshot, oldest first.
#[flutter_rust_bridge::frb(sync)]
pub fn list_locations() -> Vec<LocationDto> {
    with_store(|store| store.locations().iter().map(LocationDto::from).collect())
        .unwrap_or_default()
}

/// Adds a place at the tapped coordinate and persists the collection.
///
/// Returns the new record, or `None` when the store has not been opened.
#[flutter_rust_bridge::frb(sync)]
pub fn add_location(latitude: f64, longitude: f64) -> Option<LocationDto> {
    with_store(|store| {
        let added = store.add_location(Coordinate::new(latitude, longitude));
        persist_best_effort(store);
        LocationDto::from(&added)
    })
    .ok()
}

/// Commits an edit session: replaces the record (fresh id, edited text,
/// original coordinates) and persists.
///
/// # FFI contract
/// - Never panics; returns empty string on success and error message on
///   failure. A stale `original_id` reports "not found".
#[flutter_rust_bridge::frb(sync)]
pub fn commit_location_edit(original_id: String, name: String, description: String) -> String {
    let id = match Uuid::parse_str(&original_id) {
        Ok(id) => id,
        Err(err) => return format!("invalid location id `{original_id}`: {err}"),
    };

    let outcome = with_store(|store| {
        let Some(original) = store.location(id).cloned() else {
            return format!("location `{original_id}` not found");
        };

        let mut committed: Option<Location> = None;
        let mut session = EditSession::new(
            original.clone(),
            |location| committed = Some(location),
            |_| {},
        );
        session.name = name;
        session.description = description;
        session.save();

        if let Some(replacement) = committed {
            store.modify_location(&original, replacement);
            persist_best_effort(store);
        }
        String::new()
    });

    outcome.unwrap_or_else(|err| err)
}

/// Deletes a place through the session's delete path and persists.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_location(location_id: String) -> String {
    let id = match Uuid::parse_str(&location_id) {
        Ok(id) => id,
        Err(err) => return format!("invalid location id `{location_id}`: {err}"),
    };

    let outcome = with_store(|store| {
        let Some(original) = store.location(id).cloned() else {
            return format!("location `{location_id}` not found");
        };

        let mut deleted: Option<Location> = None;
        let session = EditSession::new(original, |_| {}, |location| deleted = Some(location));
        session.delete();

        if let Some(target) = deleted {
            store.delete_location(&target);
            persist_best_effort(store);
        }
        String::new()
    });

    outcome.unwrap_or_else(|err| err)
}

/// Persists the current collection on demand.
#[flutter_rust_bridge::frb(sync)]
pub fn save_places() -> String {
    match with_store(|store| store.save()) {
        Ok(Ok(())) => String::new(),
        Ok(Err(err)) => err.to_string(),
        Err(err) => err,
    }
}

/// Nearby encyclopedia entry mirrored to Dart.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPageDto {
    pub page_id: u64,
    pub title: String,
    pub description: String,
}

impl From<NearbyItem> for NearbyPageDto {
    fn from(item: NearbyItem) -> Self {
        Self {
            page_id: item.page_id,
            title: item.title,
            description: item.description,
        }
    }
}

/// Nearby lookup outcome for the detail sheet.
///
/// `state` is `loaded` or `failed`; the Dart side renders Loading while the
/// call is in flight and a generic retry-later message on `failed`.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyLookupDto {
    pub state: String,
    pub pages: Vec<NearbyPageDto>,
}

/// One-shot Wikipedia geosearch around a place's coordinates.
///
/// # FFI contract
/// - Async; cancellation drops the in-flight request.
/// - Never throws; failures come back as `state = "failed"` with no pages.
pub async fn fetch_nearby(latitude: f64, longitude: f64) -> NearbyLookupDto {
    let client = WikipediaClient::new();
    match client
        .search_nearby(Coordinate::new(latitude, longitude))
        .await
    {
        Ok(items) => NearbyLookupDto {
            state: "loaded".to_string(),
            pages: items.into_iter().map(NearbyPageDto::from).collect(),
        },
        Err(err) => {
            error!("event=nearby_search module=ffi status=failed error={err}");
            NearbyLookupDto {
                state: "failed".to_string(),
                pages: Vec::new(),
            }
        }
    }
}

fn with_store<T>(f: impl FnOnce(&mut LocationStore) -> T) -> Result<T, String> {
    let store = STORE
        .get()
        .ok_or_else(|| "store not opened; call open_store first".to_string())?;
    let mut guard = store
        .lock()
        .map_err(|_| "store lock poisoned".to_string())?;
    Ok(f(&mut guard))
}

fn persist_best_effort(store: &LocationStore) {
    // Save failures stay non-fatal at this boundary; the store already
    // logged the cause and memory state remains authoritative.
    let _ = store.save();
}
