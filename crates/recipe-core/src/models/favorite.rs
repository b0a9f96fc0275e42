// ABOUTME: Favorites collection keyed by canonical recipe id
// ABOUTME: Ordered, duplicate-free set of recipe snapshots with favoriting timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::{slice, vec};

use super::recipe::{Difficulty, Recipe, RecipeId};
use crate::constants::recipes::{
    DEFAULT_DESCRIPTION, DEFAULT_SERVINGS, NO_INSTRUCTIONS_PLACEHOLDER, UNTITLED_RECIPE,
};

/// One favorited recipe
///
/// The full normalized recipe is kept so the favorite renders without a
/// network call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    /// Canonical namespaced id, equal to `snapshot.id`
    pub id: String,
    /// Recipe as it was when favorited
    pub snapshot: Recipe,
    /// When the recipe was favorited
    pub favorited_at: DateTime<Utc>,
    /// Snapshot is a placeholder awaiting a detail fetch
    #[serde(default)]
    pub needs_refresh: bool,
}

impl FavoriteEntry {
    /// Entry for a fully normalized recipe
    #[must_use]
    pub fn new(id: &RecipeId, snapshot: Recipe, favorited_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            snapshot,
            favorited_at,
            needs_refresh: false,
        }
    }

    /// Entry for an id with no payload; the snapshot is a placeholder until
    /// refreshed
    #[must_use]
    pub fn placeholder(id: &RecipeId, favorited_at: DateTime<Utc>) -> Self {
        let snapshot = Recipe {
            id: id.to_string(),
            title: UNTITLED_RECIPE.to_owned(),
            image_url: None,
            description: DEFAULT_DESCRIPTION.to_owned(),
            ingredients: Vec::new(),
            instructions: vec![NO_INSTRUCTIONS_PLACEHOLDER.to_owned()],
            cook_time_minutes: 0,
            servings: DEFAULT_SERVINGS,
            dietary_tags: BTreeSet::new(),
            difficulty: Difficulty::Unknown,
            source_provider: Some(id.provider()),
            category: None,
            area: None,
            health_score: None,
        };
        Self {
            id: id.to_string(),
            snapshot,
            favorited_at,
            needs_refresh: true,
        }
    }

    /// Parsed canonical id
    #[must_use]
    pub fn recipe_id(&self) -> Option<RecipeId> {
        self.id.parse().ok()
    }
}

/// Ordered favorites; insertion order is favoriting order and ids are unique
///
/// Serializes as a plain list. Deserializing drops repeated ids, keeping the
/// first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<FavoriteEntry>", into = "Vec<FavoriteEntry>")]
pub struct FavoritesSet {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesSet {
    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of favorites
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no favorites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `id` is a favorite
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Entry for `id`
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FavoriteEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries in favoriting order
    pub fn iter(&self) -> slice::Iter<'_, FavoriteEntry> {
        self.entries.iter()
    }

    /// Append an entry; returns `false` and leaves the set unchanged if the id
    /// is already present
    pub fn insert(&mut self, entry: FavoriteEntry) -> bool {
        if self.contains(&entry.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove and return the entry for `id`
    pub fn remove(&mut self, id: &str) -> Option<FavoriteEntry> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Swap in a fresh snapshot for `id` without moving the entry
    ///
    /// Clears the `needs_refresh` flag. Returns `false` if `id` is absent.
    pub fn replace_snapshot(&mut self, id: &str, snapshot: Recipe) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.snapshot = snapshot;
                entry.needs_refresh = false;
                true
            }
            None => false,
        }
    }

    /// Ids whose snapshots are still placeholders
    #[must_use]
    pub fn pending_refresh(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.needs_refresh)
            .map(|entry| entry.id.clone())
            .collect()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

impl FromIterator<FavoriteEntry> for FavoritesSet {
    fn from_iter<T: IntoIterator<Item = FavoriteEntry>>(iter: T) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

impl From<Vec<FavoriteEntry>> for FavoritesSet {
    fn from(entries: Vec<FavoriteEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<FavoritesSet> for Vec<FavoriteEntry> {
    fn from(set: FavoritesSet) -> Self {
        set.entries
    }
}

impl IntoIterator for FavoritesSet {
    type Item = FavoriteEntry;
    type IntoIter = vec::IntoIter<FavoriteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FavoritesSet {
    type Item = &'a FavoriteEntry;
    type IntoIter = slice::Iter<'a, FavoriteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
