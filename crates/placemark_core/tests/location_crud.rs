use placemark_core::{
    Coordinate, Location, LocationStore, PromptOutcome, DEFAULT_LOCATION_NAME,
};
use std::collections::HashSet;
use tempfile::TempDir;
use uuid::Uuid;

fn empty_store(dir: &TempDir) -> LocationStore {
    LocationStore::open(dir.path().join("SavedPlaces"))
}

#[test]
fn add_location_appends_with_creation_defaults() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let added = store.add_location(Coordinate::new(22.7196, 75.8577));

    let found = store.location(added.id).expect("added place should exist");
    assert_eq!(found.name, DEFAULT_LOCATION_NAME);
    assert!(found.description.is_empty());
    assert_eq!(found.latitude, 22.7196);
    assert_eq!(found.longitude, 75.8577);
}

#[test]
fn collection_keeps_insertion_order() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let first = store.add_location(Coordinate::new(1.0, 1.0));
    let second = store.add_location(Coordinate::new(2.0, 2.0));
    let third = store.add_location(Coordinate::new(3.0, 3.0));

    let ids: Vec<_> = store.locations().iter().map(|entry| entry.id).collect();
    assert_eq!(ids, [first.id, second.id, third.id]);
}

#[test]
fn ids_stay_unique_across_mutations() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let mut tracked = Vec::new();
    for i in 0..10 {
        tracked.push(store.add_location(Coordinate::new(i as f64, i as f64)));
    }

    let replacement = Location::with_id(
        Uuid::new_v4(),
        "renamed",
        "edited",
        tracked[3].coordinate(),
    );
    store.modify_location(&tracked[3], replacement);
    store.delete_location(&tracked[7]);

    let ids: HashSet<_> = store.locations().iter().map(|entry| entry.id).collect();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn modify_replaces_in_place_and_touches_nothing_else() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let first = store.add_location(Coordinate::new(1.0, 1.0));
    let second = store.add_location(Coordinate::new(2.0, 2.0));
    let third = store.add_location(Coordinate::new(3.0, 3.0));

    let replacement = Location::with_id(Uuid::new_v4(), "Indore", "", second.coordinate());
    let replacement_id = replacement.id;
    store.modify_location(&second, replacement);

    assert_eq!(store.len(), 3);
    assert_eq!(store.locations()[0].id, first.id);
    assert_eq!(store.locations()[1].id, replacement_id);
    assert_eq!(store.locations()[1].name, "Indore");
    assert_eq!(store.locations()[2].id, third.id);
}

#[test]
fn modify_of_absent_record_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let kept = store.add_location(Coordinate::new(1.0, 1.0));
    let stranger = Location::new(Coordinate::new(9.0, 9.0));
    let replacement = Location::with_id(Uuid::new_v4(), "ghost", "", stranger.coordinate());

    store.modify_location(&stranger, replacement);

    assert_eq!(store.len(), 1);
    assert_eq!(store.locations()[0].id, kept.id);
    assert_eq!(store.locations()[0].name, DEFAULT_LOCATION_NAME);
}

#[test]
fn delete_removes_exactly_one_and_preserves_order() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let first = store.add_location(Coordinate::new(1.0, 1.0));
    let second = store.add_location(Coordinate::new(2.0, 2.0));
    let third = store.add_location(Coordinate::new(3.0, 3.0));

    store.delete_location(&second);

    let ids: Vec<_> = store.locations().iter().map(|entry| entry.id).collect();
    assert_eq!(ids, [first.id, third.id]);
}

#[test]
fn delete_of_absent_record_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    store.add_location(Coordinate::new(1.0, 1.0));
    let stranger = Location::new(Coordinate::new(9.0, 9.0));

    store.delete_location(&stranger);

    assert_eq!(store.len(), 1);
}

#[test]
fn authenticate_flips_unlock_flag_only_on_success() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    assert!(!store.is_unlocked());

    assert!(!store.authenticate(&PromptOutcome(false)));
    assert!(!store.is_unlocked());

    assert!(store.authenticate(&PromptOutcome(true)));
    assert!(store.is_unlocked());
}

#[test]
fn add_modify_delete_round_trips_to_empty() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    assert!(store.is_empty());

    let added = store.add_location(Coordinate::new(22.7196, 75.8577));
    assert_eq!(store.len(), 1);

    let edited = Location::with_id(Uuid::new_v4(), "Indore", "", added.coordinate());
    store.modify_location(&added, edited.clone());

    assert_eq!(store.len(), 1);
    let current = &store.locations()[0];
    assert_eq!(current.name, "Indore");
    assert_ne!(current.id, added.id);
    assert_eq!(current.latitude, 22.7196);

    store.delete_location(&edited);
    assert!(store.is_empty());
}
