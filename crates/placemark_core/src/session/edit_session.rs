//! Detail/edit session over a single location.
//!
//! # Responsibility
//! - Hold an editable copy of one record's name and description.
//! - Track the nearby-lookup state machine: Loading -> Loaded | Failed.
//! - Hand a finalized record to injected commit/delete handlers.
//!
//! # Invariants
//! - The original record is never mutated; commit mints a replacement with
//!   a fresh id and the original coordinates.
//! - Lookup failure keeps no partial results.
//! - The session never reaches into the store; only the handlers do.

use crate::model::location::{Location, LocationId};
use crate::nearby::{NearbyItem, NearbySearch};
use log::warn;
use uuid::Uuid;

/// Nearby-lookup display state. Loaded and Failed are terminal; a new
/// session restarts at Loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    Loading,
    Loaded,
    Failed,
}

type CommitHandler<'a> = Box<dyn FnOnce(Location) + 'a>;

/// Short-lived controller for viewing and editing one place.
///
/// Commit and delete handlers are injected at construction, keeping the
/// session decoupled from whatever owns the collection. Dropping the
/// session mid-fetch drops the lookup future with it, which cancels the
/// in-flight request.
pub struct EditSession<'a> {
    original: Location,
    /// Staged display name, editable independently of the original.
    pub name: String,
    /// Staged free-text description.
    pub description: String,
    loading_state: LoadingState,
    nearby: Vec<NearbyItem>,
    on_save: CommitHandler<'a>,
    on_delete: CommitHandler<'a>,
}

impl<'a> EditSession<'a> {
    /// Opens a session over `location`, snapshotting its editable fields.
    pub fn new(
        location: Location,
        on_save: impl FnOnce(Location) + 'a,
        on_delete: impl FnOnce(Location) + 'a,
    ) -> Self {
        Self {
            name: location.name.clone(),
            description: location.description.clone(),
            original: location,
            loading_state: LoadingState::Loading,
            nearby: Vec::new(),
            on_save: Box::new(on_save),
            on_delete: Box::new(on_delete),
        }
    }

    /// The unedited record this session was opened over.
    pub fn original(&self) -> &Location {
        &self.original
    }

    pub fn loading_state(&self) -> LoadingState {
        self.loading_state
    }

    /// Decoded nearby entries; empty until the lookup reaches Loaded.
    pub fn nearby(&self) -> &[NearbyItem] {
        &self.nearby
    }

    /// Runs the one-shot nearby lookup at the session's coordinates.
    ///
    /// Success transitions to Loaded, keeping whatever order the backend's
    /// contract guarantees; zero results is still Loaded. Any transport or
    /// decode failure transitions to Failed with an empty result list. No
    /// automatic retry.
    pub async fn fetch_nearby(&mut self, api: &dyn NearbySearch) {
        match api.search_nearby(self.original.coordinate()).await {
            Ok(items) => {
                self.nearby = items;
                self.loading_state = LoadingState::Loaded;
            }
            Err(err) => {
                warn!("event=nearby_search module=session status=failed error={err}");
                self.nearby = Vec::new();
                self.loading_state = LoadingState::Failed;
            }
        }
    }

    /// Commits the staged edit through the save handler.
    ///
    /// The replacement record keeps the original coordinates and takes a
    /// fresh id; an edit intentionally changes the record's identity.
    /// Persistence stays with the caller.
    pub fn save(self) -> LocationId {
        let replacement = Location::with_id(
            Uuid::new_v4(),
            self.name,
            self.description,
            self.original.coordinate(),
        );
        let id = replacement.id;
        (self.on_save)(replacement);
        id
    }

    /// Hands the original, unedited record to the delete handler.
    pub fn delete(self) {
        (self.on_delete)(self.original);
    }
}
