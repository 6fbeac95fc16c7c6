use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::recipe::Difficulty;

/// Preferred time budget for a meal.
///
/// Parsed from the profile labels; any other label is `Any` and fits every
/// recipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrepTimePreference {
    /// "15-30 minutes"
    Quick,
    /// "30-45 minutes"
    Moderate,
    /// "45+ minutes"
    Extended,
    #[default]
    Any,
}

impl PrepTimePreference {
    pub fn matches(&self, prep_time: u32) -> bool {
        match self {
            PrepTimePreference::Quick => prep_time <= 30,
            PrepTimePreference::Moderate => (25..=45).contains(&prep_time),
            PrepTimePreference::Extended => prep_time >= 40,
            PrepTimePreference::Any => true,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PrepTimePreference::Quick => "15-30 minutes",
            PrepTimePreference::Moderate => "30-45 minutes",
            PrepTimePreference::Extended => "45+ minutes",
            PrepTimePreference::Any => "any",
        }
    }
}

impl From<&str> for PrepTimePreference {
    fn from(value: &str) -> Self {
        match value.trim() {
            "15-30 minutes" => PrepTimePreference::Quick,
            "30-45 minutes" => PrepTimePreference::Moderate,
            "45+ minutes" => PrepTimePreference::Extended,
            _ => PrepTimePreference::Any,
        }
    }
}

impl From<String> for PrepTimePreference {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<PrepTimePreference> for String {
    fn from(value: PrepTimePreference) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for PrepTimePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub cuisine_preferences: Vec<String>,
    #[serde(default)]
    pub food_dislikes: Vec<String>,
    #[serde(default)]
    pub prep_time_preference: PrepTimePreference,
    /// `None` when the profile carries a level outside the difficulty scale.
    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub cooking_level: Option<Difficulty>,
    /// Recipe id to a 1..=5 rating.
    #[serde(default)]
    pub ratings: HashMap<String, u8>,
}

impl User {
    pub fn rating_for(&self, recipe_id: &str) -> Option<u8> {
        self.ratings.get(recipe_id).copied()
    }

    pub fn prefers_cuisine(&self, cuisine: &str) -> bool {
        self.cuisine_preferences.iter().any(|c| c == cuisine)
    }
}

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.and_then(|v| Difficulty::from_str(v.trim()).ok()))
}
