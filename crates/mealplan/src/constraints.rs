use mealwise_shared::Recipe;

use crate::plan::MealPlanEntry;
use crate::policy::PlanningPolicy;

/// Diversity predicate for adding `candidate` after `planned`
///
/// Accepts the candidate only when:
/// 1. its cuisine appears fewer than `cuisine_cap_per_window` times in
///    `planned[window_start..window_start + window_days]`
/// 2. its protein appears fewer than `protein_cap` times in all of `planned`
/// 3. its id does not appear anywhere in `planned`
///
/// The window slice is clamped to `planned`, so a window past the end of the
/// plan counts nothing.
pub fn check_diversity_constraints(
    planned: &[MealPlanEntry],
    candidate: &Recipe,
    window_start: usize,
    policy: &PlanningPolicy,
) -> bool {
    let start = window_start.min(planned.len());
    let end = window_start
        .saturating_add(policy.window_days)
        .min(planned.len());

    let cuisine_count = planned[start..end]
        .iter()
        .filter(|e| e.recipe.cuisine == candidate.cuisine)
        .count();

    if cuisine_count >= policy.cuisine_cap_per_window {
        return false;
    }

    let protein_count = planned
        .iter()
        .filter(|e| e.recipe.protein == candidate.protein)
        .count();

    if protein_count >= policy.protein_cap {
        return false;
    }

    !planned.iter().any(|e| e.recipe.id == candidate.id)
}
