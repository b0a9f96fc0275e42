// ABOUTME: Favorites commands for recipe-finder
// ABOUTME: List, toggle, remove, and refresh persisted favorite recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_finder::{errors::AppResult, search::RecipeLookup};
use tracing::info;

use super::browse::parse_id;
use super::Context;
use crate::helpers::display::{print_favorites, print_refresh_report};

type Result<T> = AppResult<T>;

/// Print every favorite
pub fn list(context: &Context) -> Result<()> {
    print_favorites(&context.favorites.load(), context.json)
}

/// Favorite `id`, or unfavorite it if it already is a favorite
///
/// Favoriting fetches the current recipe so the stored snapshot is complete.
pub async fn toggle(context: &Context, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let key = id.to_string();

    let favorites = if context.favorites.is_favorite(&key) {
        context.favorites.remove(&key)
    } else {
        let recipe = context.search.lookup(&id).await?;
        context.favorites.toggle(&recipe)?
    };

    let state = if favorites.contains(&key) {
        "added to"
    } else {
        "removed from"
    };
    info!(recipe_id = %key, "Favorite toggled");
    if !context.json {
        println!("{key} {state} favorites");
    }
    print_favorites(&favorites, context.json)
}

/// Unfavorite `id`
pub fn remove(context: &Context, id: &str) -> Result<()> {
    let key = parse_id(id)?.to_string();
    let favorites = context.favorites.remove(&key);
    print_favorites(&favorites, context.json)
}

/// Replace placeholder snapshots with fetched detail
pub async fn refresh(context: &Context) -> Result<()> {
    let report = context.favorites.refresh_pending(&context.search).await;
    print_refresh_report(&report, context.json)
}
