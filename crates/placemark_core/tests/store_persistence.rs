use placemark_core::{Coordinate, Location, LocationStore};
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

#[test]
fn open_with_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = LocationStore::open(dir.path().join("SavedPlaces"));
    assert!(store.is_empty());
}

#[test]
fn open_with_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SavedPlaces");
    fs::write(&path, b"{not valid json").unwrap();

    let store = LocationStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn open_with_wrong_shape_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SavedPlaces");
    fs::write(&path, br#"{"id": "not an array"}"#).unwrap();

    let store = LocationStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn save_and_reopen_round_trips_every_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SavedPlaces");

    let mut store = LocationStore::open(&path);
    let first = store.add_location(Coordinate::new(22.7196, 75.8577));
    let mut second = store.add_location(Coordinate::new(-33.8688, 151.2093));
    second.name = "Sydney".to_string();
    second.description = "harbour city".to_string();
    let replacement = Location::with_id(second.id, "Sydney", "harbour city", second.coordinate());
    store.modify_location(&second, replacement);
    store.save().unwrap();

    let reopened = LocationStore::open(&path);
    assert_eq!(reopened.len(), 2);
    assert!(reopened.locations()[0].same_content(&first));
    assert!(reopened.locations()[1].same_content(&second));
}

#[test]
fn save_and_reopen_round_trips_empty_collection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SavedPlaces");

    let store = LocationStore::open(&path);
    store.save().unwrap();

    assert!(fs::metadata(&path).is_ok());
    let reopened = LocationStore::open(&path);
    assert!(reopened.is_empty());
}

#[test]
fn save_overwrites_whole_file_and_leaves_no_temp_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SavedPlaces");

    let mut store = LocationStore::open(&path);
    store.add_location(Coordinate::new(1.0, 1.0));
    store.save().unwrap();

    let before = store.locations()[0].clone();
    store.delete_location(&before);
    store.save().unwrap();

    let reopened = LocationStore::open(&path);
    assert!(reopened.is_empty());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn save_creates_missing_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("SavedPlaces");

    let mut store = LocationStore::open(&path);
    store.add_location(Coordinate::new(1.0, 1.0));
    store.save().unwrap();

    assert_eq!(LocationStore::open(&path).len(), 1);
}

#[test]
fn save_failure_keeps_memory_state_valid() {
    let dir = TempDir::new().unwrap();
    // A directory at the target path makes the rename fail.
    let path = dir.path().join("SavedPlaces");
    fs::create_dir_all(&path).unwrap();

    let mut store = LocationStore::open(&path);
    let added = store.add_location(Coordinate::new(1.0, 1.0));

    assert!(store.save().is_err());
    assert_eq!(store.len(), 1);
    assert_eq!(store.location(added.id).unwrap().id, added.id);
}

#[test]
fn persisted_shape_is_a_plain_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SavedPlaces");

    let mut store = LocationStore::open(&path);
    let added = store.add_location(Coordinate::new(22.7196, 75.8577));
    store.save().unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().expect("top level should be an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0]["id"],
        serde_json::Value::String(added.id.to_string())
    );
    assert_eq!(entries[0]["name"], "New location");
    assert_eq!(entries[0]["latitude"], 22.7196);
}

#[test]
fn foreign_ids_in_file_survive_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SavedPlaces");
    let id = Uuid::new_v4();
    let body = format!(
        r#"[{{"id":"{id}","name":"Pinned","description":"kept","latitude":9.5,"longitude":-3.25}}]"#
    );
    fs::write(&path, body).unwrap();

    let store = LocationStore::open(&path);
    assert_eq!(store.len(), 1);
    let loaded = store.location(id).unwrap();
    assert_eq!(loaded.name, "Pinned");
    assert_eq!(loaded.description, "kept");
    assert_eq!(loaded.latitude, 9.5);
    assert_eq!(loaded.longitude, -3.25);
}
