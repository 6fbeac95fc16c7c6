mod error;
pub mod recipe;
pub mod user;

pub use error::*;
pub use recipe::{Difficulty, Ingredient, IngredientCategory, Recipe};
pub use user::{PrepTimePreference, User};
