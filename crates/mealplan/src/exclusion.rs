use mealwise_shared::{Recipe, User};

/// Hard excludes derived from a user's dislikes and dietary restrictions.
///
/// # Business Rules
/// - **Dislikes**: a recipe is dropped when any ingredient name or tag
///   contains a disliked term (case-insensitive)
/// - **Restrictions**: every restriction must be matched by at least one tag
///   containing it (case-insensitive, so `gluten-free` accepts a
///   `gluten-free option` tag)
/// - Blank entries are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserExclusions {
    dislikes: Vec<String>,
    restrictions: Vec<String>,
}

impl UserExclusions {
    pub fn for_user(user: &User) -> Self {
        Self {
            dislikes: normalize_terms(&user.food_dislikes),
            restrictions: normalize_terms(&user.dietary_restrictions),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dislikes.is_empty() && self.restrictions.is_empty()
    }

    pub fn allows(&self, recipe: &Recipe) -> bool {
        if self.is_empty() {
            return true;
        }

        let tags: Vec<String> = recipe.tags.iter().map(|t| t.to_lowercase()).collect();

        let disliked = self.dislikes.iter().any(|dislike| {
            tags.iter().any(|t| t.contains(dislike.as_str()))
                || recipe
                    .ingredients
                    .iter()
                    .any(|i| i.name.to_lowercase().contains(dislike.as_str()))
        });

        if disliked {
            return false;
        }

        self.restrictions
            .iter()
            .all(|restriction| tags.iter().any(|t| t.contains(restriction.as_str())))
    }
}

fn normalize_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
