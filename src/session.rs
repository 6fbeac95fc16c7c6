use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use mealwise_mealplan::{MealPlan, PlanningPolicy, alternatives_for_day, generate_meal_plan};
use mealwise_recipe::RecipeCatalog;
use mealwise_shared::{Recipe, User};
use mealwise_shopping::{GroceryList, generate_grocery_list};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;

const SAMPLE_USER: &str = include_str!("../data/user.json");

/// Command-line overrides for a session, each falling back to configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub seed: Option<u64>,
    pub user: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub start: Option<NaiveDate>,
}

/// Everything one planning run needs: catalog, user, policy and a random
/// source. A seeded session replays the same plans.
pub struct Session {
    pub catalog: RecipeCatalog,
    pub user: User,
    pub policy: PlanningPolicy,
    pub start: NaiveDate,
    rng: StdRng,
}

impl Session {
    pub fn open(config: &Config, options: SessionOptions) -> Result<Self> {
        let catalog = match options.catalog.or_else(|| config.catalog.path.clone()) {
            Some(path) => RecipeCatalog::from_path(&path)
                .with_context(|| format!("loading recipe catalog {}", path.display()))?,
            None => RecipeCatalog::sample()?,
        };

        let user = match options.user.or_else(|| config.profile.path.clone()) {
            Some(path) => load_user(&path)?,
            None => sample_user()?,
        };

        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        tracing::debug!(
            recipes = catalog.len(),
            user = %user.id,
            seed = ?options.seed,
            "session opened"
        );

        Ok(Self {
            catalog,
            user,
            policy: config.planning.clone(),
            start: options.start.unwrap_or_else(|| Local::now().date_naive()),
            rng,
        })
    }

    pub fn generate_plan(&mut self) -> Result<MealPlan> {
        let plan = generate_meal_plan(
            &self.catalog,
            &self.user,
            self.start,
            &self.policy,
            &mut self.rng,
        )?;

        Ok(plan)
    }

    pub fn alternatives(&self, plan: &MealPlan, day_index: usize) -> Result<Vec<Arc<Recipe>>> {
        let alternatives =
            alternatives_for_day(&self.catalog, plan, &self.user, day_index, &self.policy)?;

        Ok(alternatives)
    }

    pub fn grocery_list(&self, plan: &MealPlan) -> GroceryList {
        generate_grocery_list(plan.recipes())
    }
}

pub fn load_user(path: &Path) -> Result<User> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading user profile {}", path.display()))?;

    serde_json::from_str(&json).with_context(|| format!("parsing user profile {}", path.display()))
}

pub fn sample_user() -> Result<User> {
    Ok(serde_json::from_str(SAMPLE_USER)?)
}
