// ABOUTME: Favorites store with load-merge-save persistence over a key-value backend
// ABOUTME: Migrates legacy keys on read and falls back to session-only favorites on storage failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use super::migration::{self, Decoded};
use super::FavoritesError;
use crate::constants::storage_keys::{FAVORITES, LEGACY_SAVED_RECIPES};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{FavoriteEntry, FavoritesSet, Recipe, RecipeId};
use crate::search::RecipeLookup;
use crate::storage::KeyValueStore;

/// Outcome of [`FavoritesStore::refresh_pending`]
#[derive(Debug, Default)]
pub struct RefreshReport {
    /// Ids whose placeholder snapshot was replaced
    pub refreshed: Vec<String>,
    /// Ids whose lookup failed, with the failure message
    pub failed: Vec<(String, String)>,
    /// Favorites after the refresh
    pub favorites: FavoritesSet,
}

struct StoreState {
    session_only: bool,
    session: FavoritesSet,
}

/// Persisted favorites
///
/// Each mutation reads the stored set, applies the change and writes the
/// whole set back. Mutations inside one process are serialized by a mutex.
///
/// If the backend fails, the store switches to session-only mode for the rest
/// of its lifetime: favorites keep working in memory and the backend is not
/// touched again, so a value that could not be read is never overwritten.
pub struct FavoritesStore {
    backend: Arc<dyn KeyValueStore>,
    state: Mutex<StoreState>,
}

impl FavoritesStore {
    /// Store over the given backend
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            state: Mutex::new(StoreState {
                session_only: false,
                session: FavoritesSet::new(),
            }),
        }
    }

    /// Whether persistence failed and favorites now live only in memory
    #[must_use]
    pub fn is_session_only(&self) -> bool {
        self.lock().session_only
    }

    /// Current favorites, migrating any legacy records found
    pub fn load(&self) -> FavoritesSet {
        self.mutate(|_| {})
    }

    /// Whether `id` is currently a favorite
    pub fn is_favorite(&self, id: &str) -> bool {
        self.load().contains(id)
    }

    /// Favorite `recipe` if it is not a favorite, otherwise unfavorite it
    ///
    /// Toggling on stores the given recipe as the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe has no source provider or its id is not
    /// a valid id in that provider's namespace
    pub fn toggle(&self, recipe: &Recipe) -> Result<FavoritesSet, FavoritesError> {
        let id = validate_favoritable(recipe)?;
        let key = id.to_string();
        Ok(self.mutate(|set| {
            if set.remove(&key).is_some() {
                debug!(recipe_id = %key, "Removed favorite");
            } else {
                set.insert(FavoriteEntry::new(&id, recipe.clone(), Utc::now()));
                debug!(recipe_id = %key, "Added favorite");
            }
        }))
    }

    /// Unfavorite `id`; removing an id that is not a favorite changes nothing
    pub fn remove(&self, id: &str) -> FavoritesSet {
        self.mutate(|set| {
            if set.remove(id).is_some() {
                debug!(recipe_id = %id, "Removed favorite");
            }
        })
    }

    /// Replace placeholder snapshots of migrated favorites with fetched detail
    ///
    /// Lookups run before the store is locked; entries whose lookup fails stay
    /// in place and remain pending. Entries removed meanwhile are not
    /// re-added.
    pub async fn refresh_pending(&self, lookup: &dyn RecipeLookup) -> RefreshReport {
        let pending = self.load().pending_refresh();
        let mut fetched = Vec::new();
        let mut failed = Vec::new();

        for key in pending {
            match fetch_snapshot(lookup, &key).await {
                Ok(recipe) => fetched.push((key, recipe)),
                Err(e) => {
                    warn!(recipe_id = %key, error = %e, "Could not refresh favorite");
                    failed.push((key, e.to_string()));
                }
            }
        }

        let mut refreshed = Vec::new();
        let favorites = self.mutate(|set| {
            for (key, recipe) in fetched {
                if set.replace_snapshot(&key, recipe) {
                    refreshed.push(key);
                }
            }
        });
        info!(
            refreshed = refreshed.len(),
            failed = failed.len(),
            "Refreshed migrated favorites"
        );

        RefreshReport {
            refreshed,
            failed,
            favorites,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load-merge-save around `change`
    fn mutate<F>(&self, change: F) -> FavoritesSet
    where
        F: FnOnce(&mut FavoritesSet),
    {
        let mut state = self.lock();
        if state.session_only {
            change(&mut state.session);
            return state.session.clone();
        }

        let (mut set, needs_write) = match self.read_persisted() {
            Ok(read) => read,
            Err(e) => {
                degrade(&mut state, &e);
                change(&mut state.session);
                return state.session.clone();
            }
        };

        let before = set.clone();
        change(&mut set);
        if needs_write || set != before {
            if let Err(e) = self.write(&set) {
                state.session.clone_from(&set);
                degrade(&mut state, &e);
                return set;
            }
        }

        state.session.clone_from(&set);
        set
    }

    /// Read the canonical key and the legacy key, merged in that order
    ///
    /// The flag is set when legacy records were found and the merged set must
    /// be written back in the canonical format.
    fn read_persisted(&self) -> AppResult<(FavoritesSet, bool)> {
        let now = Utc::now();
        let mut merged = FavoritesSet::new();
        let mut migrated = 0;
        let mut legacy_key_present = false;

        for key in [FAVORITES, LEGACY_SAVED_RECIPES] {
            let Some(raw) = self.backend.get(key)? else {
                continue;
            };
            legacy_key_present |= key == LEGACY_SAVED_RECIPES;
            let decoded: Decoded = migration::decode(&raw, now).map_err(|e| {
                AppError::new(
                    ErrorCode::SerializationError,
                    format!("unreadable favorites under '{key}': {e}"),
                )
                .with_source(e)
            })?;
            migrated += decoded.migrated;
            for entry in decoded.set {
                merged.insert(entry);
            }
        }

        if migrated > 0 {
            info!(migrated, "Migrated legacy favorites to canonical ids");
        }
        Ok((merged, migrated > 0 || legacy_key_present))
    }

    fn write(&self, set: &FavoritesSet) -> AppResult<()> {
        let encoded = migration::encode(set)?;
        self.backend.set(FAVORITES, &encoded)?;
        self.backend.remove(LEGACY_SAVED_RECIPES)?;
        Ok(())
    }
}

fn degrade(state: &mut StoreState, error: &AppError) {
    warn!(
        error = %error,
        "Favorites storage failed; keeping favorites for this session only"
    );
    state.session_only = true;
}

fn validate_favoritable(recipe: &Recipe) -> Result<RecipeId, FavoritesError> {
    let provider = recipe
        .source_provider
        .ok_or_else(|| FavoritesError::MissingProvider {
            id: recipe.id.clone(),
        })?;
    let id = recipe
        .id
        .parse::<RecipeId>()
        .map_err(|source| FavoritesError::InvalidId {
            id: recipe.id.clone(),
            source,
        })?;
    if id.provider() != provider {
        return Err(FavoritesError::NamespaceMismatch {
            id: recipe.id.clone(),
            provider,
        });
    }
    Ok(id)
}

async fn fetch_snapshot(lookup: &dyn RecipeLookup, key: &str) -> AppResult<Recipe> {
    let id = key
        .parse::<RecipeId>()
        .map_err(|e| AppError::invalid_input(e.to_string()))?;
    lookup.lookup(&id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProviderTag;
    use crate::storage::MemoryStore;

    fn recipe(id: &str, provider: Option<ProviderTag>) -> Recipe {
        let mut recipe = Recipe::fallback_stub("test", "Test", "Test recipe");
        recipe.id = id.to_owned();
        recipe.source_provider = provider;
        recipe
    }

    #[test]
    fn test_validate_rejects_stub_and_mismatch() {
        let stub = Recipe::fallback_stub("error", "Error", "x");
        assert!(matches!(
            validate_favoritable(&stub),
            Err(FavoritesError::MissingProvider { .. })
        ));

        let mismatched = recipe("mealdb:1", Some(ProviderTag::Spoonacular));
        assert!(matches!(
            validate_favoritable(&mismatched),
            Err(FavoritesError::NamespaceMismatch { .. })
        ));

        let bare = recipe("52772", Some(ProviderTag::MealDb));
        assert!(matches!(
            validate_favoritable(&bare),
            Err(FavoritesError::InvalidId { .. })
        ));
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let store = FavoritesStore::new(Arc::new(MemoryStore::new()));
        let r = recipe("mealdb:52772", Some(ProviderTag::MealDb));

        assert!(store.toggle(&r).unwrap().contains("mealdb:52772"));
        assert!(!store.toggle(&r).unwrap().contains("mealdb:52772"));
        assert!(store.load().is_empty());
    }
}
