// ABOUTME: Raw TheMealDB payloads with the twenty positional ingredient fields gathered into slots
// ABOUTME: Decodes strIngredientN/strMeasureN pairs into a fixed-size array at the serde boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Deserialize;
use serde_json::Value;
use std::array;
use std::collections::HashMap;

use crate::constants::recipes::MEAL_INGREDIENT_SLOTS;

/// One positional ingredient/measure pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealSlot {
    /// `strIngredientN`
    pub ingredient: Option<String>,
    /// `strMeasureN`
    pub measure: Option<String>,
}

/// One meal as returned by `search.php` and `lookup.php`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "MealWire")]
pub struct MealRecord {
    /// Opaque native id
    pub id: String,
    /// Meal name
    pub name: Option<String>,
    /// Category, e.g. `Vegetarian`
    pub category: Option<String>,
    /// Regional cuisine
    pub area: Option<String>,
    /// Instructions as one block of text
    pub instructions: Option<String>,
    /// Thumbnail URL
    pub thumbnail: Option<String>,
    /// Ingredient slots 1..=20 at indices 0..20
    pub slots: [MealSlot; MEAL_INGREDIENT_SLOTS],
}

impl MealRecord {
    /// Record with only an id, for building fixtures
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            category: None,
            area: None,
            instructions: None,
            thumbnail: None,
            slots: array::from_fn(|_| MealSlot::default()),
        }
    }
}

#[derive(Deserialize)]
struct MealWire {
    #[serde(rename = "idMeal")]
    id: IdValue,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

/// `idMeal` is a string on the wire, but tolerate numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Text(String),
    Number(u64),
}

fn string_field(rest: &HashMap<String, Value>, key: &str) -> Option<String> {
    match rest.get(key)? {
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}

impl From<MealWire> for MealRecord {
    fn from(wire: MealWire) -> Self {
        let slots = array::from_fn(|index| {
            let position = index + 1;
            MealSlot {
                ingredient: string_field(&wire.rest, &format!("strIngredient{position}")),
                measure: string_field(&wire.rest, &format!("strMeasure{position}")),
            }
        });
        Self {
            id: match wire.id {
                IdValue::Text(text) => text,
                IdValue::Number(number) => number.to_string(),
            },
            name: wire.name,
            category: wire.category,
            area: wire.area,
            instructions: wire.instructions,
            thumbnail: wire.thumbnail,
            slots,
        }
    }
}

/// `search.php` / `lookup.php` envelope; `meals` is `null` when nothing matched
#[derive(Debug, Deserialize)]
pub(crate) struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_fields_land_in_slots() {
        let record: MealRecord = serde_json::from_str(
            r#"{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strIngredient3": "brown sugar",
                "strMeasure3": null,
                "strIngredient20": "",
                "strIngredient21": "ignored"
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, "52772");
        assert_eq!(record.slots[0].ingredient.as_deref(), Some("soy sauce"));
        assert_eq!(record.slots[0].measure.as_deref(), Some("3/4 cup"));
        assert_eq!(record.slots[1], MealSlot::default());
        assert_eq!(record.slots[2].measure, None);
        assert_eq!(record.slots[19].ingredient.as_deref(), Some(""));
    }

    #[test]
    fn test_null_meals_envelope() {
        let response: MealsResponse = serde_json::from_str(r#"{"meals":null}"#).unwrap();
        assert!(response.meals.is_none());
    }

    #[test]
    fn test_numeric_id_accepted() {
        let record: MealRecord = serde_json::from_str(r#"{"idMeal": 52772}"#).unwrap();
        assert_eq!(record.id, "52772");
    }
}
