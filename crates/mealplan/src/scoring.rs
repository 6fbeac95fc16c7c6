use mealwise_shared::{Difficulty, Recipe, User};

const BASE_SCORE: i32 = 3;
const CUISINE_BONUS: i32 = 2;
const NEUTRAL_RATING: i32 = 3;

/// Per-factor contributions to a recipe's preference weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub cuisine: i32,
    pub rating: i32,
    pub cooking_level: i32,
    pub prep_time: i32,
}

impl ScoreBreakdown {
    /// Sum of all factors, floored at 0.
    pub fn total(&self) -> u32 {
        let raw = self.base + self.cuisine + self.rating + self.cooking_level + self.prep_time;

        raw.max(0) as u32
    }
}

/// Score how well a recipe fits a user
///
/// - base 3
/// - +2 when the cuisine is one of the user's preferences
/// - `rating - 3` when the user already rated the recipe (1..=5 maps to -2..=+2)
/// - +1 when the recipe is not harder than the user's cooking level
/// - +1 when the prep time falls in the user's preferred band
pub fn score_breakdown(recipe: &Recipe, user: &User) -> ScoreBreakdown {
    let cuisine = if user.prefers_cuisine(&recipe.cuisine) {
        CUISINE_BONUS
    } else {
        0
    };

    let rating = user
        .rating_for(&recipe.id)
        .filter(|r| *r > 0)
        .map(|r| i32::from(r) - NEUTRAL_RATING)
        .unwrap_or_default();

    let cooking_level = i32::from(matches_cooking_level(recipe.difficulty, user.cooking_level));
    let prep_time = i32::from(user.prep_time_preference.matches(recipe.prep_time));

    ScoreBreakdown {
        base: BASE_SCORE,
        cuisine,
        rating,
        cooking_level,
        prep_time,
    }
}

/// Preference weight used for weighted random selection. Never negative.
pub fn weighted_score(recipe: &Recipe, user: &User) -> u32 {
    score_breakdown(recipe, user).total()
}

fn matches_cooking_level(difficulty: Difficulty, level: Option<Difficulty>) -> bool {
    level.is_some_and(|level| difficulty <= level)
}
