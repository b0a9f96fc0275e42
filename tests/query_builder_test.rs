// ABOUTME: Integration tests for filter-to-query mapping and the search service
// ABOUTME: Covers the sample-data marker, parameter omission, browse, name search, and lookup dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{detail, meal, FakeCatalog, FakeIngredientMatch};
use recipe_finder::errors::ErrorCode;
use recipe_finder::models::{ProviderTag, RecipeId, SearchFilter};
use recipe_finder::query::{build, QueryPlan};
use recipe_finder::search::{RecipeLookup, RecipeSearch};
use recipe_providers::{ProviderQuery, SearchResultCard};
use std::sync::Arc;

fn provider_query(filter: &SearchFilter) -> ProviderQuery {
    match build(filter) {
        QueryPlan::Provider(query) => query,
        QueryPlan::SampleData => panic!("expected a provider query"),
    }
}

#[test]
fn test_empty_filter_is_sample_data() {
    assert_eq!(build(&SearchFilter::default()), QueryPlan::SampleData);

    let mut filter = SearchFilter::default();
    filter.toggle_intolerance("Dairy");
    filter.toggle_intolerance("Dairy");
    assert_eq!(build(&filter), QueryPlan::SampleData);
}

#[test]
fn test_any_field_makes_a_provider_query() {
    let diet_only = SearchFilter {
        diet: Some("vegan".to_owned()),
        ..SearchFilter::default()
    };
    assert_eq!(
        provider_query(&diet_only).to_params(),
        vec![("diet", "vegan".to_owned())]
    );

    let ingredients_only = SearchFilter::from_params([("ingredients", "tomato, basil,,")]);
    assert_eq!(
        provider_query(&ingredients_only).to_params(),
        vec![("includeIngredients", "basil,tomato".to_owned())]
    );
}

#[test]
fn test_fields_pass_verbatim_and_unset_are_omitted() {
    let filter = SearchFilter::from_params([
        ("query", "Pasta Carbonara"),
        ("cuisine", "italian"),
        ("diet", "  "),
        ("intolerances", "Gluten,Dairy"),
        ("page", "2"),
    ]);

    let params = provider_query(&filter).to_params();

    assert_eq!(
        params,
        vec![
            ("query", "Pasta Carbonara".to_owned()),
            ("cuisine", "italian".to_owned()),
            ("intolerances", "Dairy,Gluten".to_owned()),
        ]
    );
}

#[tokio::test]
async fn test_browse_without_filter_uses_curated_recipes() {
    let fake = Arc::new(FakeIngredientMatch::default());
    let search = RecipeSearch::new(fake.clone(), Arc::new(FakeCatalog::default()));

    let recipes = search.browse(&SearchFilter::default()).await.unwrap();

    assert_eq!(recipes.len(), 6);
    assert_eq!(recipes[0].title, "Strawberry Cheesecake");
    assert_eq!(fake.complex_count(), 0);
}

#[tokio::test]
async fn test_browse_with_filter_runs_complex_search() {
    let fake = Arc::new(FakeIngredientMatch {
        cards: Some(vec![SearchResultCard {
            id: 654_959,
            title: Some("Pasta With Tuna".to_owned()),
            ready_in_minutes: Some(45),
            servings: Some(4),
            ..SearchResultCard::default()
        }]),
        ..FakeIngredientMatch::default()
    });
    let search = RecipeSearch::new(fake.clone(), Arc::new(FakeCatalog::default()));
    let filter = SearchFilter {
        query: Some("pasta".to_owned()),
        ..SearchFilter::default()
    };

    let recipes = search.browse(&filter).await.unwrap();

    assert_eq!(fake.complex_count(), 1);
    assert_eq!(
        fake.last_query.lock().unwrap().as_ref().unwrap().query.as_deref(),
        Some("pasta")
    );
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, "spoonacular:654959");
}

#[tokio::test]
async fn test_browse_failure_is_an_error() {
    let search = RecipeSearch::new(
        Arc::new(FakeIngredientMatch::default()),
        Arc::new(FakeCatalog::default()),
    );
    let filter = SearchFilter {
        cuisine: Some("thai".to_owned()),
        ..SearchFilter::default()
    };

    let error = search.browse(&filter).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_name_search_and_blank_term() {
    let catalog = Arc::new(FakeCatalog::with_meals(vec![
        meal("52771", "Spicy Arrabiata Penne", &[("penne rigate", "1 pound")]),
        meal("52772", "Teriyaki Chicken Casserole", &[]),
    ]));
    let search = RecipeSearch::new(Arc::new(FakeIngredientMatch::default()), catalog);

    let found = search.search_by_name("arrabiata").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "mealdb:52771");
    assert_eq!(found[0].ingredients[0].text, "penne rigate — 1 pound");

    assert!(search.search_by_name("   ").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_lookup_dispatches_on_namespace() {
    let fake = Arc::new(FakeIngredientMatch::default().with_detail(detail(716_429)));
    let catalog = Arc::new(FakeCatalog::with_meals(vec![meal("52771", "Arrabiata", &[])]));
    let search = RecipeSearch::new(fake.clone(), catalog.clone());

    let from_mealdb = search
        .lookup(&RecipeId::new(ProviderTag::MealDb, "52771"))
        .await
        .unwrap();
    assert_eq!(from_mealdb.source_provider, Some(ProviderTag::MealDb));
    assert_eq!(catalog.lookup_count(), 1);

    let from_spoonacular = search
        .lookup(&"spoonacular:716429".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(from_spoonacular.id, "spoonacular:716429");
    assert_eq!(fake.detail_count(), 1);

    let error = search
        .lookup(&RecipeId::new(ProviderTag::Spoonacular, "abc"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(fake.detail_count(), 1);
}
