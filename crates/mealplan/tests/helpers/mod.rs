#![allow(dead_code)]

use chrono::NaiveDate;
use mealwise_recipe::RecipeCatalog;
use mealwise_shared::{Difficulty, Ingredient, IngredientCategory, PrepTimePreference, Recipe, User};

pub const CUISINES: [&str; 7] = [
    "Italian",
    "Mexican",
    "Thai",
    "Indian",
    "Greek",
    "Japanese",
    "French",
];

pub const PROTEINS: [&str; 7] = [
    "Chicken", "Beef", "Pork", "Fish", "Tofu", "Lamb", "Shrimp",
];

pub fn create_test_recipe(id: &str, cuisine: &str, protein: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: format!("{cuisine} {protein}"),
        cuisine: cuisine.to_string(),
        protein: protein.to_string(),
        prep_time: 35,
        difficulty: Difficulty::Intermediate,
        tags: vec![],
        ingredients: vec![Ingredient {
            name: protein.to_lowercase(),
            quantity: 1.0,
            unit: "lb".to_string(),
            category: IngredientCategory::MeatAndSeafood,
        }],
    }
}

/// Every cuisine paired with every protein, 49 recipes.
///
/// Large enough that a 14-day plan never has to fall back under the default
/// caps.
pub fn create_balanced_catalog() -> RecipeCatalog {
    let recipes = CUISINES
        .iter()
        .flat_map(|cuisine| {
            PROTEINS.iter().map(move |protein| {
                create_test_recipe(
                    &format!("{}-{}", cuisine.to_lowercase(), protein.to_lowercase()),
                    cuisine,
                    protein,
                )
            })
        })
        .collect();

    RecipeCatalog::new(recipes).unwrap()
}

pub fn create_test_user() -> User {
    User {
        id: "user-1".to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        cuisine_preferences: vec!["Italian".to_string(), "Thai".to_string()],
        prep_time_preference: PrepTimePreference::Moderate,
        cooking_level: Some(Difficulty::Intermediate),
        ..Default::default()
    }
}

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}
