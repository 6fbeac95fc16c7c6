use mealwise_shared::Recipe;

use crate::aggregation::IngredientAggregationService;
use crate::categorization::{CategorizationService, GroceryList};

/// Build the grocery list for the recipes of a plan, in day order
///
/// Pass `plan.recipes()`; a recipe planned twice is bought twice. The list is
/// derived fresh on every call and holds no reference to the plan.
pub fn generate_grocery_list<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> GroceryList {
    let consolidated = IngredientAggregationService::consolidate(recipes);
    let consolidated_len = consolidated.len();

    let items = IngredientAggregationService::reconcile_units(consolidated);

    tracing::debug!(
        consolidated = consolidated_len,
        items = items.len(),
        "grocery list generated"
    );

    CategorizationService::group(items)
}
