use crate::error::CatalogError;
use crate::model::{Difficulty, Recipe};
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::convert::TryFrom;

const UNKNOWN_ID: &str = "<unknown>";

/// Loosely shaped dataset entry, validated on conversion into [`Recipe`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonRecipe {
    id: Option<IdType>,
    name: Option<String>,
    cuisine: Option<String>,
    description: Option<String>,
    image: Option<String>,
    prep_time: Option<i64>,
    cook_time: Option<i64>,
    difficulty: Option<String>,
    servings: Option<i64>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdType {
    String(String),
    Number(u64),
}

fn required<T>(value: Option<T>, id: &str, field: &str) -> Result<T, CatalogError> {
    value.ok_or_else(|| CatalogError::invalid_recipe(id, format!("{} is missing", field)))
}

fn non_negative(value: Option<i64>, id: &str, field: &str) -> Result<u32, CatalogError> {
    let value = required(value, id, field)?;
    if value < 0 {
        return Err(CatalogError::invalid_recipe(
            id,
            format!("{} must not be negative", field),
        ));
    }
    u32::try_from(value)
        .map_err(|_| CatalogError::invalid_recipe(id, format!("{} is out of range", field)))
}

impl TryFrom<JsonRecipe> for Recipe {
    type Error = CatalogError;

    fn try_from(raw: JsonRecipe) -> Result<Self, Self::Error> {
        let id = match raw.id {
            Some(IdType::String(id)) => id,
            Some(IdType::Number(id)) => id.to_string(),
            None => return Err(CatalogError::invalid_recipe(UNKNOWN_ID, "id is missing")),
        };

        let difficulty = required(raw.difficulty, &id, "difficulty")?
            .parse::<Difficulty>()
            .map_err(|e| CatalogError::invalid_recipe(&id, e))?;

        let recipe = Recipe {
            name: required(raw.name, &id, "name")?,
            cuisine: required(raw.cuisine, &id, "cuisine")?,
            description: raw.description.unwrap_or_default(),
            image: raw.image.unwrap_or_default(),
            prep_time: non_negative(raw.prep_time, &id, "prepTime")?,
            cook_time: non_negative(raw.cook_time, &id, "cookTime")?,
            difficulty,
            servings: non_negative(raw.servings, &id, "servings")?,
            ingredients: raw.ingredients,
            instructions: raw.instructions,
            id,
        };

        recipe.validate()?;
        Ok(recipe)
    }
}

/// Parse a JSON dataset into validated recipes
///
/// Accepts either a bare array of recipe objects or an object with a
/// `recipes` array. The first malformed entry aborts the load.
pub fn parse_recipes(content: &str) -> Result<Vec<Recipe>, CatalogError> {
    let mut dataset: Value = serde_json::from_str(content)?;
    if let Some(recipes) = dataset.get_mut("recipes").map(Value::take) {
        dataset = recipes;
    }
    let entries: Vec<Value> = serde_json::from_value(dataset)?;
    debug!("Parsed {} raw dataset entries", entries.len());

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let label = entry_label(&entry, index);
            let raw: JsonRecipe = serde_json::from_value(entry)
                .map_err(|e| CatalogError::invalid_recipe(&label, e.to_string()))?;
            Recipe::try_from(raw)
        })
        .collect()
}

/// Name an entry in error messages by its id, or by position when it has none
fn entry_label(entry: &Value, index: usize) -> String {
    match entry.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => format!("entry {}", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> String {
        r#"[{
                "id": "pad-thai",
                "name": "Pad Thai",
                "cuisine": "Thai",
                "description": "Noodles",
                "image": "https://example.com/pad-thai.jpg",
                "prepTime": 20,
                "cookTime": 10,
                "difficulty": "easy",
                "servings": 2,
                "ingredients": ["200g rice noodles"],
                "instructions": ["Soak the noodles"]
            }]"#
        .to_string()
    }

    #[test]
    fn test_parse_basic_recipe() {
        let recipes = parse_recipes(&entry()).unwrap();

        assert_eq!(recipes.len(), 1);
        let recipe = &recipes[0];
        assert_eq!(recipe.id, "pad-thai");
        assert_eq!(recipe.name, "Pad Thai");
        assert_eq!(recipe.prep_time, 20);
        assert_eq!(recipe.cook_time, 10);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.ingredients, vec!["200g rice noodles"]);
    }

    #[test]
    fn test_parse_wrapped_dataset() {
        let json = format!(r#"{{"recipes": {}}}"#, entry());
        let recipes = parse_recipes(&json).unwrap();
        assert_eq!(recipes.len(), 1);
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let json = r#"[{"id": 7, "name": "Toast", "cuisine": "American", "prepTime": 1,
            "cookTime": 2, "difficulty": "Easy", "servings": 1,
            "ingredients": ["1 slice bread"], "instructions": ["Toast it"]}]"#;
        let recipes = parse_recipes(json).unwrap();
        assert_eq!(recipes[0].id, "7");
    }

    #[test]
    fn test_optional_text_fields_default_to_empty() {
        let json = r#"[{"id": "t", "name": "Toast", "cuisine": "American", "prepTime": 1,
            "cookTime": 2, "difficulty": "Easy", "servings": 1,
            "ingredients": ["1 slice bread"], "instructions": ["Toast it"]}]"#;
        let recipes = parse_recipes(json).unwrap();
        assert!(recipes[0].description.is_empty());
        assert!(recipes[0].image.is_empty());
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let json = r#"[{"id": "t", "cuisine": "American", "prepTime": 1, "cookTime": 2,
            "difficulty": "Easy", "servings": 1,
            "ingredients": ["1 slice bread"], "instructions": ["Toast it"]}]"#;
        let err = parse_recipes(json).unwrap_err();
        assert!(err.to_string().contains("name is missing"));
    }

    #[test]
    fn test_negative_prep_time_is_rejected() {
        let json = entry().replace("\"prepTime\": 20", "\"prepTime\": -5");
        let err = parse_recipes(&json).unwrap_err();
        assert!(err.to_string().contains("prepTime must not be negative"));
    }

    #[test]
    fn test_zero_servings_is_rejected() {
        let json = entry().replace("\"servings\": 2", "\"servings\": 0");
        let err = parse_recipes(&json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecipe { ref id, .. } if id == "pad-thai"));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let json = entry().replace("\"easy\"", "\"impossible\"");
        let err = parse_recipes(&json).unwrap_err();
        assert!(err.to_string().contains("unknown difficulty"));
    }

    #[test]
    fn test_missing_instructions_are_rejected() {
        let json = entry().replace("\"instructions\": [\"Soak the noodles\"]", "\"instructions\": []");
        assert!(parse_recipes(&json).is_err());
    }

    #[test]
    fn test_wrong_field_type_names_the_entry() {
        let json = entry().replace("\"prepTime\": 20", "\"prepTime\": \"20\"");
        let err = parse_recipes(&json).unwrap_err();
        match err {
            CatalogError::InvalidRecipe { id, reason } => {
                assert_eq!(id, "pad-thai");
                assert!(reason.contains("invalid type"), "{}", reason);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_entry_without_id_is_named_by_position() {
        let json = format!(r#"[{}, {{"name": 5}}]"#, entry().trim_matches(|c| c == '[' || c == ']'));
        let err = parse_recipes(&json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecipe { ref id, .. } if id == "entry 1"));
    }

    #[test]
    fn test_object_without_recipes_is_rejected() {
        let result = parse_recipes(r#"{"dishes": []}"#);
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_recipes("[{\"id\": ");
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }
}
