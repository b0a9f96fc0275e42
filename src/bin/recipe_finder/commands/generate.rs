// ABOUTME: Recipe generation command for recipe-finder
// ABOUTME: Runs the ingredient pipeline and prints the merged recipe or its fallback stub
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_finder::{
    errors::{AppError, AppResult},
    generation::PipelineOutcome,
    models::GenerationRequest,
};
use tracing::debug;

use super::Context;
use crate::helpers::display::print_generation;

type Result<T> = AppResult<T>;

/// Generate one recipe from the given ingredients
pub async fn generate(
    context: &Context,
    ingredients: Vec<String>,
    servings: Option<u32>,
    cook_time: Option<u32>,
) -> Result<()> {
    let mut request = GenerationRequest::new(ingredients);
    if let Some(servings) = servings {
        request = request.with_servings(servings);
    }
    if let Some(minutes) = cook_time {
        request = request.with_cook_time(minutes);
    }

    let mut states = context.pipeline.subscribe();
    let watcher = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = *states.borrow_and_update();
            debug!(%state, "Generation progress");
        }
    });

    let outcome = context.pipeline.generate(&request).await;
    watcher.abort();

    match outcome {
        PipelineOutcome::Current(result) => print_generation(&result, context.json),
        PipelineOutcome::Superseded { request, latest } => Err(AppError::internal(format!(
            "generation {request} was superseded by {latest}"
        ))),
    }
}
