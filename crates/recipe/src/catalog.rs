use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use mealwise_shared::{Error, Recipe, Result};

const SAMPLE_CATALOG: &str = include_str!("../data/recipes.json");

/// Immutable, ordered recipe collection.
///
/// Recipes are handed out as `Arc<Recipe>` so plans can reference them without
/// copying.
#[derive(Clone, Debug, Default)]
pub struct RecipeCatalog {
    recipes: Arc<[Arc<Recipe>]>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::new();

        for recipe in recipes.iter() {
            if !seen.insert(recipe.id.as_str()) {
                return Err(Error::DuplicateRecipe(recipe.id.to_owned()));
            }
        }

        Ok(Self {
            recipes: recipes.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;

        Self::new(recipes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        tracing::debug!(path = %path.display(), recipes = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    /// The bundled fifteen-recipe catalog.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn all(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Recipe>> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
