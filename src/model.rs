use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// A single catalog entry
///
/// Ingredient quantities are written for `servings` people. Instructions are
/// positional: step N is performed after step N-1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub description: String,
    pub image: String,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Cooking time in minutes
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Preparation plus cooking time in minutes
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Case-insensitive comparison against this recipe's cuisine tag
    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.cuisine.to_lowercase() == cuisine.to_lowercase()
    }

    /// Whether `needle` (already lowercased) occurs in the name or any ingredient
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(needle))
    }

    /// Check the invariants every catalog entry must hold
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::invalid_recipe(&self.name, "id is empty"));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid_recipe(&self.id, "name is empty"));
        }
        if self.cuisine.trim().is_empty() {
            return Err(CatalogError::invalid_recipe(&self.id, "cuisine is empty"));
        }
        if self.servings == 0 {
            return Err(CatalogError::invalid_recipe(
                &self.id,
                "servings must be greater than zero",
            ));
        }
        if self.ingredients.is_empty() {
            return Err(CatalogError::invalid_recipe(&self.id, "no ingredients"));
        }
        if self.instructions.is_empty() {
            return Err(CatalogError::invalid_recipe(&self.id, "no instructions"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_recipe(id: &str, name: &str, cuisine: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        description: format!("{} description", name),
        image: format!("https://example.com/{}.jpg", id),
        prep_time: 15,
        cook_time: 30,
        difficulty: Difficulty::Medium,
        servings: 4,
        ingredients: vec!["2 cups water".to_string()],
        instructions: vec!["Cook it".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_time() {
        let recipe = sample_recipe("r1", "Dal", "Indian");
        assert_eq!(recipe.total_time(), 45);
    }

    #[test]
    fn test_has_cuisine_ignores_case() {
        let recipe = sample_recipe("r1", "Dal", "Indian");
        assert!(recipe.has_cuisine("indian"));
        assert!(recipe.has_cuisine("INDIAN"));
        assert!(!recipe.has_cuisine("Chinese"));
    }

    #[test]
    fn test_mentions_name_and_ingredients() {
        let mut recipe = sample_recipe("r1", "Butter Chicken", "Indian");
        recipe.ingredients = vec!["500g paneer".to_string(), "1 tsp Garam Masala".to_string()];

        assert!(recipe.mentions("chicken"));
        assert!(recipe.mentions("garam"));
        assert!(!recipe.mentions("tofu"));
    }

    #[test]
    fn test_validate_accepts_well_formed_recipe() {
        assert!(sample_recipe("r1", "Dal", "Indian").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_servings() {
        let mut recipe = sample_recipe("r1", "Dal", "Indian");
        recipe.servings = 0;

        let err = recipe.validate().unwrap_err();
        assert!(err.to_string().contains("servings"));
    }

    #[test]
    fn test_validate_rejects_empty_steps() {
        let mut recipe = sample_recipe("r1", "Dal", "Indian");
        recipe.instructions.clear();
        assert!(recipe.validate().is_err());

        let mut recipe = sample_recipe("r2", "Dal", "Indian");
        recipe.ingredients.clear();
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut recipe = sample_recipe("r1", "Dal", "Indian");
        recipe.name = "   ".to_string();
        assert!(recipe.validate().is_err());

        let recipe = sample_recipe("", "Dal", "Indian");
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Medium ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }
}
