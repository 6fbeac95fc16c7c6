use std::collections::HashMap;

use mealwise_shared::{IngredientCategory, Recipe};
use serde::Serialize;

use crate::conversion::{UnitAccumulator, round_quantity};

/// One line of a grocery list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: IngredientCategory,
    /// Names of the recipes that need this item, first-seen order, no repeats.
    pub recipes: Vec<String>,
}

/// Ingredient Aggregation Service
///
/// Stateless domain service that merges a plan's ingredients into grocery
/// items:
/// - "Flour 2 cups" + "flour 1 cups" = "Flour 3 cups" (same name and unit)
/// - "Flour 2 cups" + "Flour 8 tbsp" = "Flour 2.5 cups" (reconciled)
/// - "Onion 1 whole" + "Onion 1 cup" = "Onion 2 whole" (no conversion known)
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    /// Flatten every ingredient of every recipe and merge those sharing a
    /// lowercased name and an identical unit string.
    ///
    /// A recipe listed twice contributes its ingredients twice. Items keep the
    /// name, unit and category of their first occurrence and come out in
    /// first-seen order.
    pub fn consolidate<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<GroceryItem> {
        let mut items: Vec<GroceryItem> = Vec::new();
        let mut index: HashMap<(String, String), usize> = HashMap::new();

        for recipe in recipes {
            for ingredient in &recipe.ingredients {
                let key = (ingredient.name.to_lowercase(), ingredient.unit.clone());

                match index.get(&key) {
                    Some(&i) => {
                        let item = &mut items[i];
                        item.quantity += ingredient.quantity;
                        push_unique(&mut item.recipes, &recipe.name);
                    }
                    None => {
                        index.insert(key, items.len());
                        items.push(GroceryItem {
                            name: ingredient.name.clone(),
                            quantity: ingredient.quantity,
                            unit: ingredient.unit.clone(),
                            category: ingredient.category,
                            recipes: vec![recipe.name.clone()],
                        });
                    }
                }
            }
        }

        items
    }

    /// Fold unit variants of the same ingredient into one item
    ///
    /// Items are grouped by lowercased name in first-seen order. A group with
    /// a single variant passes through untouched. Larger groups are folded
    /// with [`UnitAccumulator`] into the first variant's name and category,
    /// rounded to 2 decimals, with their recipe lists merged.
    pub fn reconcile_units(items: Vec<GroceryItem>) -> Vec<GroceryItem> {
        let mut groups: Vec<Vec<GroceryItem>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for item in items {
            let name = item.name.to_lowercase();
            match index.get(&name) {
                Some(&i) => groups[i].push(item),
                None => {
                    index.insert(name, groups.len());
                    groups.push(vec![item]);
                }
            }
        }

        groups.into_iter().filter_map(Self::fold_group).collect()
    }

    fn fold_group(mut group: Vec<GroceryItem>) -> Option<GroceryItem> {
        if group.len() <= 1 {
            return group.pop();
        }

        let mut variants = group.into_iter();
        let first = variants.next()?;

        let mut accumulator = UnitAccumulator::new(first.unit.as_str());
        accumulator.add(first.quantity, &first.unit);

        let mut recipes = first.recipes;
        for variant in variants {
            accumulator.add(variant.quantity, &variant.unit);
            for recipe in &variant.recipes {
                push_unique(&mut recipes, recipe);
            }
        }

        let (quantity, unit) = accumulator.into_parts();

        Some(GroceryItem {
            name: first.name,
            quantity: round_quantity(quantity),
            unit,
            category: first.category,
            recipes,
        })
    }
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_owned());
    }
}
