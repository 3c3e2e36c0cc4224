use crate::error::CatalogError;
use crate::model::Recipe;
use std::path::PathBuf;

mod json;

pub use self::json::parse_recipes;

/// Default dataset compiled into the binary
pub const DEFAULT_DATASET: &str = include_str!("../../data/recipes.json");

/// A place the catalog's recipes are loaded from, once, at startup
pub trait RecipeSource {
    /// Human-readable name used in log output
    fn name(&self) -> &str;
    fn load(&self) -> Result<Vec<Recipe>, CatalogError>;
}

/// JSON dataset read from a file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl RecipeSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<Recipe>, CatalogError> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_recipes(&content)
    }
}

/// JSON dataset held in memory, including the embedded default
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    content: String,
    name: &'static str,
}

impl JsonStrSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            name: "inline",
        }
    }

    pub fn embedded() -> Self {
        Self {
            content: DEFAULT_DATASET.to_string(),
            name: "embedded",
        }
    }
}

impl RecipeSource for JsonStrSource {
    fn name(&self) -> &str {
        self.name
    }

    fn load(&self) -> Result<Vec<Recipe>, CatalogError> {
        parse_recipes(&self.content)
    }
}
