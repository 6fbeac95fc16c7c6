use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use mealwise_mealplan::{MealPlan, PlanningPolicy, generate_meal_plan};
use mealwise_recipe::RecipeCatalog;
use mealwise_shared::{Difficulty, Ingredient, IngredientCategory, Recipe, User};
use mealwise_shopping::generate_grocery_list;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn create_test_recipe(name: &str, ingredients: &[(&str, f64, &str, IngredientCategory)]) -> Recipe {
    Recipe {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        cuisine: "American".to_string(),
        protein: "Vegetarian".to_string(),
        prep_time: 30,
        difficulty: Difficulty::Beginner,
        tags: vec![],
        ingredients: ingredients
            .iter()
            .map(|(name, quantity, unit, category)| Ingredient {
                name: name.to_string(),
                quantity: *quantity,
                unit: unit.to_string(),
                category: *category,
            })
            .collect(),
    }
}

fn plan_of(recipes: Vec<Recipe>) -> MealPlan {
    MealPlan::from_recipes(
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
        recipes.into_iter().map(Arc::new),
        &User::default(),
    )
}

#[test]
fn test_cups_and_tablespoons_of_flour() {
    let pancakes = create_test_recipe(
        "Pancakes",
        &[("Flour", 2.0, "cups", IngredientCategory::PantryAndDryGoods)],
    );
    let roux = create_test_recipe(
        "Roux",
        &[("Flour", 8.0, "tbsp", IngredientCategory::PantryAndDryGoods)],
    );

    for plan in [
        plan_of(vec![pancakes.clone(), roux.clone()]),
        plan_of(vec![roux, pancakes]),
    ] {
        let list = generate_grocery_list(plan.recipes());

        let pantry = &list[&IngredientCategory::PantryAndDryGoods];
        assert_eq!(list.len(), 1);
        assert_eq!(pantry.len(), 1);
        assert_eq!(pantry[0].name, "Flour");
        assert_eq!(pantry[0].quantity, 2.5);
        assert_eq!(pantry[0].unit, "cups");
        assert_eq!(pantry[0].recipes.len(), 2);
    }
}

#[test]
fn test_empty_plan_empty_list() {
    let list = generate_grocery_list(plan_of(vec![]).recipes());

    assert!(list.is_empty());
}

#[test]
fn test_sections_in_store_order_with_sorted_items() {
    let tacos = create_test_recipe(
        "Tacos",
        &[
            ("Tortillas", 8.0, "whole", IngredientCategory::Bakery),
            ("Ground beef", 1.0, "lb", IngredientCategory::MeatAndSeafood),
            ("Onion", 1.0, "whole", IngredientCategory::Produce),
            ("Cheddar", 1.0, "cup", IngredientCategory::DairyAndEggs),
            ("Avocado", 2.0, "whole", IngredientCategory::Produce),
        ],
    );

    let list = generate_grocery_list(plan_of(vec![tacos]).recipes());

    let sections: Vec<String> = list.keys().map(|c| c.to_string()).collect();
    assert_eq!(
        sections,
        vec!["Produce", "Meat & Seafood", "Dairy & Eggs", "Bakery"]
    );

    let produce: Vec<&str> = list[&IngredientCategory::Produce]
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(produce, vec!["Avocado", "Onion"]);
}

#[test]
fn test_repeated_recipe_doubles_quantities() {
    let salad = create_test_recipe(
        "Salad",
        &[("Lettuce", 1.0, "head", IngredientCategory::Produce)],
    );

    let list = generate_grocery_list(plan_of(vec![salad.clone(), salad]).recipes());

    let item = &list[&IngredientCategory::Produce][0];
    assert_eq!(item.quantity, 2.0);
    assert_eq!(item.recipes, vec!["Salad"]);
}

#[test]
fn test_traceability_lists_contributing_recipes() {
    let soup = create_test_recipe(
        "Soup",
        &[("Garlic", 2.0, "cloves", IngredientCategory::Produce)],
    );
    let pasta = create_test_recipe(
        "Pasta",
        &[("garlic", 3.0, "cloves", IngredientCategory::Produce)],
    );

    let list = generate_grocery_list(plan_of(vec![soup, pasta]).recipes());

    let garlic = &list[&IngredientCategory::Produce][0];
    assert_eq!(garlic.name, "Garlic");
    assert_eq!(garlic.quantity, 5.0);
    assert_eq!(garlic.recipes, vec!["Soup", "Pasta"]);
}

#[test]
fn test_totals_preserved_for_generated_plans() -> anyhow::Result<()> {
    let catalog = RecipeCatalog::sample()?;
    let user = User::default();
    let start = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = generate_meal_plan(&catalog, &user, start, &PlanningPolicy::default(), &mut rng)?;

        let mut raw: HashMap<String, (f64, Vec<String>)> = HashMap::new();
        for recipe in plan.recipes() {
            for ingredient in &recipe.ingredients {
                let entry = raw.entry(ingredient.name.to_lowercase()).or_default();
                entry.0 += ingredient.quantity;
                if !entry.1.contains(&ingredient.unit) {
                    entry.1.push(ingredient.unit.clone());
                }
            }
        }

        let list = generate_grocery_list(plan.recipes());
        let items: Vec<_> = list.values().flatten().collect();
        assert_eq!(items.len(), raw.len());

        for item in items {
            let (total, units) = &raw[&item.name.to_lowercase()];
            if units.len() == 1 {
                assert!(
                    (item.quantity - total).abs() < 1e-9,
                    "{} expected {total}, got {}",
                    item.name,
                    item.quantity
                );
                assert_eq!(&item.unit, &units[0]);
            }
        }
    }

    Ok(())
}

#[test]
fn test_serializes_with_section_labels() -> anyhow::Result<()> {
    let steak = create_test_recipe(
        "Steak",
        &[("Ribeye", 1.0, "lb", IngredientCategory::MeatAndSeafood)],
    );

    let list = generate_grocery_list(plan_of(vec![steak]).recipes());
    let json = serde_json::to_value(&list)?;

    assert_eq!(json["Meat & Seafood"][0]["name"], "Ribeye");
    assert_eq!(json["Meat & Seafood"][0]["category"], "Meat & Seafood");
    assert_eq!(json["Meat & Seafood"][0]["recipes"][0], "Steak");

    Ok(())
}
