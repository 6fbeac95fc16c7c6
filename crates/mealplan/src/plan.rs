use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use mealwise_shared::{Error, Recipe, Result, User, ensure_slot};
use serde::Serialize;

/// One day of a meal plan.
///
/// `user_rating` is a snapshot taken when the recipe was assigned. It does not
/// follow later changes to `User::ratings`; use [`MealPlan::rate`] to update
/// both sides together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlanEntry {
    pub date: NaiveDate,
    pub recipe: Arc<Recipe>,
    pub user_rating: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlan {
    start_date: NaiveDate,
    entries: Vec<MealPlanEntry>,
}

impl MealPlan {
    pub(crate) fn new(start_date: NaiveDate, entries: Vec<MealPlanEntry>) -> Self {
        Self {
            start_date,
            entries,
        }
    }

    /// Build a plan from recipes in day order, one per day starting at
    /// `start_date`, with ratings snapshotted from `user`.
    pub fn from_recipes(
        start_date: NaiveDate,
        recipes: impl IntoIterator<Item = Arc<Recipe>>,
        user: &User,
    ) -> Self {
        let entries = recipes
            .into_iter()
            .enumerate()
            .map(|(day, recipe)| MealPlanEntry {
                date: day_date(start_date, day),
                user_rating: user.rating_for(&recipe.id),
                recipe,
            })
            .collect();

        Self::new(start_date, entries)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn entries(&self) -> &[MealPlanEntry] {
        &self.entries
    }

    pub fn get(&self, day_index: usize) -> Option<&MealPlanEntry> {
        self.entries.get(day_index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.entries.iter().map(|e| e.recipe.as_ref())
    }

    /// Record a 1..=5 rating for the meal on `day_index`.
    ///
    /// Writes the user's rating map and this entry's snapshot. Other days
    /// showing the same recipe keep their previous snapshot.
    pub fn rate(&mut self, user: &mut User, day_index: usize, rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(Error::InvalidRating(rating));
        }

        ensure_slot!(day_index, self.entries.len());
        let entry = &mut self.entries[day_index];

        user.ratings.insert(entry.recipe.id.to_owned(), rating);
        entry.user_rating = Some(rating);

        tracing::debug!(recipe = %entry.recipe.id, rating, "meal rated");

        Ok(())
    }

    /// Replace the recipe on `day_index` and re-snapshot its rating.
    ///
    /// The rest of the plan is not re-validated against the diversity caps.
    pub fn swap(&mut self, day_index: usize, recipe: Arc<Recipe>, user: &User) -> Result<()> {
        ensure_slot!(day_index, self.entries.len());
        let entry = &mut self.entries[day_index];

        tracing::debug!(old = %entry.recipe.id, new = %recipe.id, day_index, "meal swapped");

        entry.user_rating = user.rating_for(&recipe.id);
        entry.recipe = recipe;

        Ok(())
    }

    /// Move the entry at `from` to position `to`.
    ///
    /// Recipes and ratings travel with their entry; dates are reassigned in
    /// sequence from the plan's start date.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        ensure_slot!(from, self.entries.len());
        ensure_slot!(to, self.entries.len());

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);

        for (day, entry) in self.entries.iter_mut().enumerate() {
            entry.date = day_date(self.start_date, day);
        }

        Ok(())
    }
}

pub(crate) fn day_date(start_date: NaiveDate, day: usize) -> NaiveDate {
    start_date + Duration::days(day as i64)
}
