use std::sync::Arc;

use chrono::NaiveDate;
use mealwise_recipe::RecipeCatalog;
use mealwise_shared::{Error, Recipe, Result, User};
use rand::Rng;

use crate::constraints::check_diversity_constraints;
use crate::exclusion::UserExclusions;
use crate::plan::{MealPlan, MealPlanEntry, day_date};
use crate::policy::PlanningPolicy;
use crate::scoring::weighted_score;

/// Generate a plan of `policy.horizon_days` meals starting at `start_date`
///
/// For every day the catalog is filtered by the diversity predicate against
/// the meals already placed (plus the user's exclusions when the policy
/// enforces them), then one candidate is drawn with probability proportional
/// to its preference weight. When nothing survives the filter the day falls
/// back to a uniform pick among the recipes the exclusions allow, and only
/// then from the whole catalog, so the plan always has one entry per day.
///
/// # Errors
/// `Error::EmptyCatalog` when the catalog has no recipes.
///
/// # Determinism
/// All randomness comes from `rng`; a seeded `StdRng` reproduces the same
/// plan for the same inputs.
pub fn generate_meal_plan<R: Rng + ?Sized>(
    catalog: &RecipeCatalog,
    user: &User,
    start_date: NaiveDate,
    policy: &PlanningPolicy,
    rng: &mut R,
) -> Result<MealPlan> {
    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let exclusions = policy
        .enforce_user_exclusions
        .then(|| UserExclusions::for_user(user));

    let mut entries: Vec<MealPlanEntry> = Vec::with_capacity(policy.horizon_days);
    let mut fallbacks = 0usize;

    for day in 0..policy.horizon_days {
        let date = day_date(start_date, day);
        let window_start = policy.window_start(day);

        let weighted: Vec<(&Arc<Recipe>, u32)> = catalog
            .all()
            .iter()
            .filter(|r| exclusions.as_ref().is_none_or(|e| e.allows(r)))
            .filter(|r| check_diversity_constraints(&entries, r, window_start, policy))
            .map(|r| (r, weighted_score(r, user)))
            .collect();

        let recipe = match select_weighted(&weighted, rng) {
            Some(recipe) => Arc::clone(recipe),
            None => {
                fallbacks += 1;
                fallback_pick(catalog, exclusions.as_ref(), day, rng)
            }
        };

        entries.push(MealPlanEntry {
            date,
            user_rating: user.rating_for(&recipe.id),
            recipe,
        });
    }

    tracing::info!(
        user = %user.id,
        start = %start_date,
        days = entries.len(),
        fallbacks,
        "meal plan generated"
    );

    Ok(MealPlan::new(start_date, entries))
}

/// Uniform pick for a day where no recipe passes the diversity caps
///
/// Recipes the user's exclusions allow are tried first, caps ignored. Only
/// when the exclusions leave nothing does the pick come from the whole
/// catalog. `catalog` must not be empty.
fn fallback_pick<R: Rng + ?Sized>(
    catalog: &RecipeCatalog,
    exclusions: Option<&UserExclusions>,
    day: usize,
    rng: &mut R,
) -> Arc<Recipe> {
    let allowed: Vec<&Arc<Recipe>> = catalog
        .all()
        .iter()
        .filter(|r| exclusions.is_none_or(|e| e.allows(r)))
        .collect();

    if !allowed.is_empty() {
        let recipe = Arc::clone(allowed[rng.random_range(0..allowed.len())]);

        tracing::debug!(
            day,
            recipe = %recipe.id,
            "no recipe satisfies diversity constraints, picked from allowed recipes"
        );

        return recipe;
    }

    let recipe = Arc::clone(&catalog.all()[rng.random_range(0..catalog.len())]);

    tracing::debug!(
        day,
        recipe = %recipe.id,
        "no recipe satisfies user exclusions, picked from full catalog"
    );

    recipe
}

/// Weighted random selection by linear scan
///
/// Draws `uniform[0, 1) * total_weight`, then subtracts each weight in order
/// and returns the first item where the remainder drops to 0 or below. When
/// every weight is 0 the draw is 0 and the first item is returned. `None`
/// only for an empty slice.
pub fn select_weighted<'a, T, R: Rng + ?Sized>(
    weighted: &'a [(T, u32)],
    rng: &mut R,
) -> Option<&'a T> {
    let (first, _) = weighted.first()?;
    let total: u64 = weighted.iter().map(|(_, w)| u64::from(*w)).sum();
    let mut remainder = rng.random::<f64>() * total as f64;

    for (item, weight) in weighted {
        remainder -= f64::from(*weight);
        if remainder <= 0.0 {
            return Some(item);
        }
    }

    Some(first)
}
