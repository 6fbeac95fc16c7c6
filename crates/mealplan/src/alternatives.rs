use std::sync::Arc;

use mealwise_recipe::RecipeCatalog;
use mealwise_shared::{Recipe, Result, User, ensure_slot};

use crate::constraints::check_diversity_constraints;
use crate::exclusion::UserExclusions;
use crate::plan::{MealPlan, MealPlanEntry};
use crate::policy::PlanningPolicy;
use crate::scoring::weighted_score;

/// Rank swap candidates for the meal on `day_index`
///
/// The slot being replaced is removed first so it does not count against its
/// own replacement. Candidates must differ from `current` and pass the
/// diversity predicate against the remaining days; they are returned best
/// weight first (catalog order on ties), at most `policy.alternatives_limit`.
///
/// An empty result means nothing qualifies and is not an error.
pub fn alternative_meals(
    catalog: &RecipeCatalog,
    current: &Recipe,
    plan: &MealPlan,
    user: &User,
    day_index: usize,
    policy: &PlanningPolicy,
) -> Result<Vec<Arc<Recipe>>> {
    ensure_slot!(day_index, plan.len());

    Ok(rank_alternatives(catalog, current, plan, user, day_index, policy))
}

/// [`alternative_meals`] for whatever recipe the plan holds on `day_index`.
pub fn alternatives_for_day(
    catalog: &RecipeCatalog,
    plan: &MealPlan,
    user: &User,
    day_index: usize,
    policy: &PlanningPolicy,
) -> Result<Vec<Arc<Recipe>>> {
    ensure_slot!(day_index, plan.len());
    let current = &plan.entries()[day_index].recipe;

    Ok(rank_alternatives(catalog, current, plan, user, day_index, policy))
}

fn rank_alternatives(
    catalog: &RecipeCatalog,
    current: &Recipe,
    plan: &MealPlan,
    user: &User,
    day_index: usize,
    policy: &PlanningPolicy,
) -> Vec<Arc<Recipe>> {
    let window_start = policy.window_start(day_index);
    let others: Vec<MealPlanEntry> = plan
        .entries()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != day_index)
        .map(|(_, e)| e.clone())
        .collect();

    let exclusions = policy
        .enforce_user_exclusions
        .then(|| UserExclusions::for_user(user));

    let mut scored: Vec<(&Arc<Recipe>, u32)> = catalog
        .all()
        .iter()
        .filter(|r| r.id != current.id)
        .filter(|r| exclusions.as_ref().is_none_or(|e| e.allows(r)))
        .filter(|r| check_diversity_constraints(&others, r, window_start, policy))
        .map(|r| (r, weighted_score(r, user)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(policy.alternatives_limit)
        .map(|(r, _)| Arc::clone(r))
        .collect()
}
