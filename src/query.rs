// ABOUTME: Maps UI filter state to provider query parameters
// ABOUTME: An all-empty filter selects the curated sample data instead of a network call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_providers::ProviderQuery;

use crate::models::SearchFilter;

/// What a browse request should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    /// No filter is active; show the curated recipes without a network call
    SampleData,
    /// Run a filtered provider search
    Provider(ProviderQuery),
}

impl QueryPlan {
    /// Whether this plan needs no network call
    #[must_use]
    pub const fn is_sample_data(&self) -> bool {
        matches!(self, Self::SampleData)
    }
}

/// Build the query for a filter
///
/// Blank fields are omitted. Intolerances and ingredients are comma-joined in
/// sorted order.
#[must_use]
pub fn build(filter: &SearchFilter) -> QueryPlan {
    if filter.is_empty() {
        return QueryPlan::SampleData;
    }

    QueryPlan::Provider(ProviderQuery {
        query: filter.query().map(str::to_owned),
        diet: filter.diet().map(str::to_owned),
        cuisine: filter.cuisine().map(str::to_owned),
        intolerances: join(filter.intolerances()),
        include_ingredients: join(filter.ingredients()),
    })
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = items.collect::<Vec<_>>().join(",");
    (!joined.is_empty()).then_some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_filter_is_sample_data() {
        let filter = SearchFilter {
            query: Some("   ".to_owned()),
            ..SearchFilter::default()
        };
        assert!(build(&filter).is_sample_data());
    }
}
