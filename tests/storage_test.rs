// ABOUTME: Integration tests for the key-value storage backends
// ABOUTME: Validates file layout, missing keys, removal, key validation, and backend selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_finder::config::{StorageBackend, StorageConfig};
use recipe_finder::errors::StorageError;
use recipe_finder::storage::{from_config, FileStore, KeyValueStore, MemoryStore};
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn test_file_store_missing_key_is_none() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    assert!(store.get("favorites").unwrap().is_none());
    // Removing a key that was never written succeeds
    store.remove("favorites").unwrap();
}

#[test]
fn test_file_store_writes_one_json_file_per_key() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("recipe-finder").join("data");
    let store = FileStore::new(&nested);

    store.set("favorites", r#"{"version":2,"entries":[]}"#).unwrap();

    let on_disk = fs::read_to_string(nested.join("favorites.json")).unwrap();
    assert_eq!(on_disk, r#"{"version":2,"entries":[]}"#);
    assert_eq!(fs::read_dir(&nested).unwrap().count(), 1);
    assert_eq!(
        store.get("favorites").unwrap().as_deref(),
        Some(r#"{"version":2,"entries":[]}"#)
    );
}

#[test]
fn test_file_store_overwrite_and_remove() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    store.set("saved_recipes", "[1]").unwrap();
    store.set("saved_recipes", "[1,2]").unwrap();
    assert_eq!(store.get("saved_recipes").unwrap().as_deref(), Some("[1,2]"));

    store.remove("saved_recipes").unwrap();
    assert!(store.get("saved_recipes").unwrap().is_none());
    assert!(!dir.path().join("saved_recipes.json").exists());
}

#[test]
fn test_file_store_values_survive_a_new_instance() {
    let dir = TempDir::new().unwrap();
    FileStore::new(dir.path()).set("favorites", "[]").unwrap();

    let reopened = FileStore::new(dir.path());

    assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_file_store_rejects_path_like_keys() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    for key in ["", "../favorites", "a/b", "fav.json"] {
        assert!(matches!(
            store.set(key, "[]"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}

#[test]
fn test_file_store_unwritable_dir_is_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file in the way").unwrap();
    let store = FileStore::new(&blocker);

    let error = store.set("favorites", "[]").unwrap_err();

    assert!(matches!(error, StorageError::Io { ref key, .. } if key == "favorites"));
}

#[test]
fn test_memory_store_roundtrip() {
    let store = MemoryStore::new();

    store.set("favorites", "[]").unwrap();
    assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[]"));
    store.remove("favorites").unwrap();
    assert!(store.get("favorites").unwrap().is_none());
}

#[test]
fn test_from_config_selects_backend() {
    let dir = TempDir::new().unwrap();

    let file_backed = from_config(&StorageConfig {
        backend: StorageBackend::File,
        data_dir: dir.path().to_path_buf(),
    });
    file_backed.set("favorites", "[]").unwrap();
    assert!(dir.path().join("favorites.json").exists());

    let memory_dir = dir.path().join("unused");
    let in_memory = from_config(&StorageConfig {
        backend: StorageBackend::Memory,
        data_dir: memory_dir.clone(),
    });
    in_memory.set("favorites", "[]").unwrap();
    assert!(!memory_dir.exists());
}

#[test]
fn test_file_store_concurrent_writers_never_fail() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));

    let writers: Vec<_> = ["[\"mealdb:1\"]", "[\"mealdb:2\"]"]
        .into_iter()
        .map(|value| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..500)
                    .filter(|_| store.set("favorites", value).is_err())
                    .count()
            })
        })
        .collect();
    let failures: usize = writers.into_iter().map(|w| w.join().unwrap()).sum();

    assert_eq!(failures, 0);
    let stored = store.get("favorites").unwrap().unwrap();
    assert!(stored == "[\"mealdb:1\"]" || stored == "[\"mealdb:2\"]");
    let leftovers = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}
