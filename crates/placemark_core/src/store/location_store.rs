//! Authoritative owner of the location collection.
//!
//! # Responsibility
//! - Provide add/modify/delete/lookup over the ordered collection.
//! - Persist the whole collection to the places file on request.
//! - Gate UI read access behind the device-auth unlock flag.
//!
//! # Invariants
//! - Mutations touch memory only; persistence happens when `save` is called.
//! - `modify_location` replaces at the matched index, preserving order.
//! - A failed `save` leaves the in-memory collection untouched and valid.

use crate::auth::DeviceAuthenticator;
use crate::model::location::{Coordinate, Location, LocationId};
use crate::store::{persistence, StoreResult};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

/// Single authoritative store for saved places.
///
/// Constructed explicitly with its storage path; there is no ambient
/// instance in core. Accessed from one logical UI session, so all
/// operations are plain `&mut self` with no locking.
pub struct LocationStore {
    path: PathBuf,
    locations: Vec<Location>,
    is_unlocked: bool,
}

impl LocationStore {
    /// Opens the store at `path`, loading the persisted collection.
    ///
    /// Missing or undecodable files fall back to an empty collection. The
    /// fallback is logged and deliberately not an error: a corrupt places
    /// file must never block app startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let locations = match persistence::load_locations(&path) {
            Ok(locations) => {
                info!(
                    "event=store_open module=store status=ok count={} path={}",
                    locations.len(),
                    path.display()
                );
                locations
            }
            Err(err) => {
                warn!(
                    "event=store_open module=store status=fallback_empty path={} error={}",
                    path.display(),
                    err
                );
                Vec::new()
            }
        };

        Self {
            path,
            locations,
            is_unlocked: false,
        }
    }

    /// Appends a new place at `coordinate` and returns a copy of it.
    ///
    /// The new record gets a fresh id and creation defaults. Memory only;
    /// the caller triggers `save` when it wants the change on disk.
    pub fn add_location(&mut self, coordinate: Coordinate) -> Location {
        let location = Location::new(coordinate);
        info!(
            "event=location_add module=store status=ok id={}",
            location.id
        );
        self.locations.push(location.clone());
        location
    }

    /// Replaces the first record with `old`'s id by `new`, at the same index.
    ///
    /// No-op when `old` is not present; a stale edit commit is not an error.
    pub fn modify_location(&mut self, old: &Location, new: Location) {
        if let Some(index) = self.locations.iter().position(|entry| entry == old) {
            info!(
                "event=location_modify module=store status=ok old_id={} new_id={}",
                old.id, new.id
            );
            self.locations[index] = new;
        }
    }

    /// Removes the first record with `target`'s id. No-op when absent.
    pub fn delete_location(&mut self, target: &Location) {
        if let Some(index) = self.locations.iter().position(|entry| entry == target) {
            info!(
                "event=location_delete module=store status=ok id={}",
                target.id
            );
            self.locations.remove(index);
        }
    }

    /// Persists the whole collection, atomically overwriting the places file.
    ///
    /// Failure is logged here and returned for callers that want it; the UI
    /// edge treats it as non-fatal. In-memory state is valid either way.
    pub fn save(&self) -> StoreResult<()> {
        match persistence::save_locations(&self.path, &self.locations) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok count={}",
                    self.locations.len()
                );
                Ok(())
            }
            Err(err) => {
                error!("event=store_save module=store status=error error={err}");
                Err(err)
            }
        }
    }

    /// Runs the device authentication capability and updates the unlock flag.
    ///
    /// Success flips the flag to true; denial or unavailability leaves it
    /// false so the user stays on the locked screen and may retry manually.
    pub fn authenticate(&mut self, authenticator: &dyn DeviceAuthenticator) -> bool {
        match authenticator.authenticate() {
            Ok(()) => {
                info!("event=authenticate module=store status=ok");
                self.is_unlocked = true;
            }
            Err(err) => {
                warn!("event=authenticate module=store status=denied error={err}");
            }
        }
        self.is_unlocked
    }

    pub fn is_unlocked(&self) -> bool {
        self.is_unlocked
    }

    /// Ordered collection, oldest first (insertion order).
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
