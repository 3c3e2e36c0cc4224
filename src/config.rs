use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Catalog configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON dataset to load; the embedded dataset is used when unset
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    /// JSON file favorites are persisted to; favorites live in memory when unset
    #[serde(default)]
    pub favorites_path: Option<PathBuf>,
    /// Number of recipes shown in the popular selection
    #[serde(default = "default_popular_limit")]
    pub popular_limit: usize,
    /// Number of related recipes shown next to a recipe
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
    /// Recipes per cuisine in the grouped preview
    #[serde(default = "default_cuisine_preview_limit")]
    pub cuisine_preview_limit: usize,
    /// Fixed seed for random selections (OS entropy when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            favorites_path: None,
            popular_limit: default_popular_limit(),
            related_limit: default_related_limit(),
            cuisine_preview_limit: default_cuisine_preview_limit(),
            seed: None,
        }
    }
}

// Default value functions
fn default_popular_limit() -> usize {
    8
}

fn default_related_limit() -> usize {
    4
}

fn default_cuisine_preview_limit() -> usize {
    6
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CATALOG__ prefix
    /// 2. catalog.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CATALOG__POPULAR_LIMIT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from `catalog.toml` and `RECIPE_CATALOG__*` variables
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    load_config_from("catalog")
}

/// Same as [`load_config`] with an explicit file name (extension optional)
pub fn load_config_from(file: &str) -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file).required(false))
        .add_source(
            Environment::with_prefix("RECIPE_CATALOG")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
