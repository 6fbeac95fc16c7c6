use std::collections::BTreeMap;

use mealwise_shared::IngredientCategory;

use crate::aggregation::GroceryItem;

/// Grocery items by store section, iterated in store-traversal order.
///
/// Only sections with at least one item are present.
pub type GroceryList = BTreeMap<IngredientCategory, Vec<GroceryItem>>;

/// Categorization Service
///
/// Stateless domain service that lays out grocery items the way a shopper
/// walks the store: Produce, Meat & Seafood, Dairy & Eggs, Pantry/Dry Goods,
/// Frozen, Bakery, Other.
pub struct CategorizationService;

impl CategorizationService {
    /// Group items by category; each section is sorted by name, byte-wise.
    pub fn group(items: Vec<GroceryItem>) -> GroceryList {
        let mut list = GroceryList::new();

        for item in items {
            list.entry(item.category).or_default().push(item);
        }

        for section in list.values_mut() {
            section.sort_by(|a, b| a.name.cmp(&b.name));
        }

        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: IngredientCategory) -> GroceryItem {
        GroceryItem {
            name: name.to_string(),
            quantity: 1.0,
            unit: "whole".to_string(),
            category,
            recipes: vec![],
        }
    }

    #[test]
    fn test_sections_follow_store_order() {
        let list = CategorizationService::group(vec![
            item("Bread", IngredientCategory::Bakery),
            item("Peas", IngredientCategory::Frozen),
            item("Salmon", IngredientCategory::MeatAndSeafood),
            item("Basil", IngredientCategory::Produce),
        ]);

        let order: Vec<IngredientCategory> = list.keys().copied().collect();
        assert_eq!(
            order,
            vec![
                IngredientCategory::Produce,
                IngredientCategory::MeatAndSeafood,
                IngredientCategory::Frozen,
                IngredientCategory::Bakery,
            ]
        );
    }

    #[test]
    fn test_items_sorted_by_name() {
        let list = CategorizationService::group(vec![
            item("tomato", IngredientCategory::Produce),
            item("Zucchini", IngredientCategory::Produce),
            item("Basil", IngredientCategory::Produce),
        ]);

        let names: Vec<&str> = list[&IngredientCategory::Produce]
            .iter()
            .map(|i| i.name.as_str())
            .collect();

        // uppercase sorts before lowercase
        assert_eq!(names, vec!["Basil", "Zucchini", "tomato"]);
    }

    #[test]
    fn test_empty_items_empty_list() {
        assert!(CategorizationService::group(vec![]).is_empty());
    }
}
