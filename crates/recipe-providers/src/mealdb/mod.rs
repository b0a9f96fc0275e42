// ABOUTME: TheMealDB name/category provider module
// ABOUTME: Fixed-slot meal record and the HTTP client implementing MealCatalogProvider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Raw TheMealDB response payloads
pub mod dto;
/// HTTP client
pub mod provider;

pub use dto::{MealRecord, MealSlot};
pub use provider::MealDbProvider;
