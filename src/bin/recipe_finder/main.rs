// ABOUTME: Recipe Finder CLI - browse, search, generate, and manage favorite recipes
// ABOUTME: Wires environment configuration, providers, and the favorites store into subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Curated recipes (no filter)
//! recipe-finder browse
//!
//! # Filtered search
//! recipe-finder browse --query pasta --diet vegetarian --intolerance dairy
//!
//! # Name search on TheMealDB
//! recipe-finder search arrabiata
//!
//! # One recipe by canonical id
//! recipe-finder show mealdb:52771
//!
//! # Recipe from ingredients
//! recipe-finder generate --ingredient chicken --ingredient rice --servings 2
//!
//! # Favorites
//! recipe-finder favorites toggle spoonacular:715538
//! recipe-finder favorites list --json
//! recipe-finder favorites refresh
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use recipe_finder::{
    config::RecipeFinderConfig, errors::AppResult, favorites::FavoritesStore,
    generation::GenerationPipeline, logging, search::RecipeSearch, storage,
};
use recipe_providers::{initialize_shared_client, MealDbProvider, SpoonacularProvider};
use std::sync::Arc;
use tracing::{info, warn};

use commands::Context;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "recipe-finder",
    about = "Recipe Finder CLI",
    long_about = "Search recipes by name, filters, or ingredients and keep a persisted list of favorites."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Browse recipes; without filters shows the curated popular recipes
    Browse {
        /// Free-text query
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Diet restriction (e.g. "vegetarian")
        #[arg(long)]
        diet: Option<String>,

        /// Cuisine (e.g. "italian")
        #[arg(long)]
        cuisine: Option<String>,

        /// Intolerance to exclude; repeat for several
        #[arg(long = "intolerance")]
        intolerances: Vec<String>,

        /// Ingredient the recipe must include; repeat for several
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },

    /// Search meals by name
    Search {
        /// Meal name or part of it
        term: String,
    },

    /// Show one recipe by canonical id (e.g. "mealdb:52771")
    Show {
        /// Canonical recipe id
        id: String,
    },

    /// Generate a recipe from ingredients you have
    Generate {
        /// Available ingredient; repeat for several
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,

        /// Servings for the generated recipe
        #[arg(long)]
        servings: Option<u32>,

        /// Cook time in minutes for the generated recipe
        #[arg(long)]
        cook_time: Option<u32>,
    },

    /// Favorite recipe management
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoritesCommand {
    /// List favorites in the order they were added
    List,

    /// Favorite a recipe, or unfavorite it if it already is one
    Toggle {
        /// Canonical recipe id
        id: String,
    },

    /// Unfavorite a recipe
    Remove {
        /// Canonical recipe id
        id: String,
    },

    /// Fetch full detail for favorites migrated without a snapshot
    Refresh,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_from_env(cli.verbose)?;
    info!("Recipe Finder CLI");

    let config = RecipeFinderConfig::from_env()?;
    initialize_shared_client(config.http.timeout_secs, config.http.connect_timeout_secs);

    let spoonacular = Arc::new(SpoonacularProvider::new(config.spoonacular.client_config()));
    if !spoonacular.is_configured() {
        warn!("SPOONACULAR_API_KEY is not set; filtered browse and generation will fail");
    }
    let catalog = Arc::new(MealDbProvider::with_base_url(&config.mealdb.base_url));

    let context = Context {
        search: RecipeSearch::new(spoonacular.clone(), catalog),
        pipeline: GenerationPipeline::new(spoonacular),
        favorites: FavoritesStore::new(storage::from_config(&config.storage)),
        json: cli.json,
    };

    match cli.command {
        Command::Browse {
            query,
            diet,
            cuisine,
            intolerances,
            ingredients,
        } => {
            commands::browse::browse(&context, query, diet, cuisine, &intolerances, &ingredients)
                .await?;
        }
        Command::Search { term } => {
            commands::browse::search(&context, &term).await?;
        }
        Command::Show { id } => {
            commands::browse::show(&context, &id).await?;
        }
        Command::Generate {
            ingredients,
            servings,
            cook_time,
        } => {
            commands::generate::generate(&context, ingredients, servings, cook_time).await?;
        }
        Command::Favorites { action } => match action {
            FavoritesCommand::List => commands::favorites::list(&context)?,
            FavoritesCommand::Toggle { id } => {
                commands::favorites::toggle(&context, &id).await?;
            }
            FavoritesCommand::Remove { id } => commands::favorites::remove(&context, &id)?,
            FavoritesCommand::Refresh => commands::favorites::refresh(&context).await?,
        },
    }

    if context.favorites.is_session_only() {
        warn!("Favorites could not be persisted this session");
    }

    Ok(())
}
