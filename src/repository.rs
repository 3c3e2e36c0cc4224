use crate::error::CatalogError;
use crate::model::Recipe;
use crate::sources::{JsonFileSource, JsonStrSource, RecipeSource};
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// Immutable, ordered set of recipes loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct RecipeRepository {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl RecipeRepository {
    /// Build a repository, validating every recipe and the uniqueness of ids
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(recipes.len());

        for (position, recipe) in recipes.iter().enumerate() {
            recipe.validate()?;
            if index.insert(recipe.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(recipe.id.clone()));
            }
        }

        Ok(Self { recipes, index })
    }

    pub fn load(source: &dyn RecipeSource) -> Result<Self, CatalogError> {
        let repository = Self::new(source.load()?)?;
        info!(
            "Loaded {} recipes from {} source",
            repository.len(),
            source.name()
        );
        Ok(repository)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        Self::load(&JsonStrSource::new(content))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::load(&JsonFileSource::new(path.as_ref()))
    }

    /// Repository backed by the dataset compiled into the crate
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::load(&JsonStrSource::embedded())
    }

    /// All recipes in stored order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.index.get(id).map(|&position| &self.recipes[position])
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct cuisine tags in order of first appearance
    ///
    /// Tags differing only in case are reported once, spelled as first seen.
    pub fn cuisines(&self) -> Vec<&str> {
        let mut seen: Vec<String> = Vec::new();
        let mut cuisines = Vec::new();

        for recipe in &self.recipes {
            let key = recipe.cuisine.to_lowercase();
            if !seen.contains(&key) {
                seen.push(key);
                cuisines.push(recipe.cuisine.as_str());
            }
        }

        cuisines
    }
}

impl<'a> IntoIterator for &'a RecipeRepository {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
