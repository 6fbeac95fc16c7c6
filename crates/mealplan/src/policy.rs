use serde::{Deserialize, Serialize};

/// Horizon and diversity caps used by plan generation and swaps.
///
/// One policy is active per run. The default is the two-week plan with a
/// per-week cuisine cap of 2 and a plan-wide protein cap of 3;
/// [`PlanningPolicy::weekly`] is the tighter one-week variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningPolicy {
    /// Number of days (entries) in a generated plan.
    pub horizon_days: usize,
    /// Size of the window the cuisine cap is counted in.
    pub window_days: usize,
    /// A cuisine may appear at most this many times per window.
    pub cuisine_cap_per_window: usize,
    /// A protein may appear at most this many times across the whole plan.
    pub protein_cap: usize,
    /// Maximum number of swap candidates returned for one day.
    pub alternatives_limit: usize,
    /// Drop recipes that clash with the user's dislikes or dietary
    /// restrictions before scoring.
    pub enforce_user_exclusions: bool,
}

impl Default for PlanningPolicy {
    fn default() -> Self {
        Self {
            horizon_days: 14,
            window_days: 7,
            cuisine_cap_per_window: 2,
            protein_cap: 3,
            alternatives_limit: 3,
            enforce_user_exclusions: true,
        }
    }
}

impl PlanningPolicy {
    pub fn weekly() -> Self {
        Self {
            horizon_days: 7,
            cuisine_cap_per_window: 1,
            protein_cap: 2,
            ..Default::default()
        }
    }

    /// Start offset of the window containing `day_index`.
    pub fn window_start(&self, day_index: usize) -> usize {
        let window = self.window_days.max(1);

        (day_index / window) * window
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.horizon_days == 0 {
            return Err("planning horizon must be at least one day".to_string());
        }
        if self.window_days == 0 {
            return Err("cuisine window must be at least one day".to_string());
        }
        if self.cuisine_cap_per_window == 0 || self.protein_cap == 0 {
            return Err("diversity caps must be greater than 0".to_string());
        }
        Ok(())
    }
}
