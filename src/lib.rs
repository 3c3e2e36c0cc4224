//! Recipe catalog engine
//!
//! Loads a fixed set of recipes once, answers cuisine, id and free-text
//! queries over them, scales ingredient quantities to a serving count and
//! keeps a local set of favorite recipe ids.
//!
//! ```
//! use recipe_catalog::Catalog;
//!
//! let catalog = Catalog::builder().seed(7).build()?;
//! let chicken = catalog.search("chicken");
//! assert!(chicken.iter().all(|r| r.name.to_lowercase().contains("chicken")
//!     || r.ingredients.iter().any(|i| i.to_lowercase().contains("chicken"))));
//! # Ok::<(), recipe_catalog::CatalogError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod query;
pub mod repository;
pub mod scale;
pub mod sources;

pub use builder::{Catalog, CatalogBuilder};
pub use crate::config::CatalogConfig;
pub use error::CatalogError;
pub use favorites::{FavoritesStore, JsonFileFavorites, MemoryFavorites};
pub use model::{Difficulty, Recipe};
pub use query::{CuisineGroup, PrepTime, QueryEngine, RecipeFilter};
pub use repository::RecipeRepository;
pub use scale::{scale, scale_ingredient, scale_recipe, Servings};

/// Load the catalog described by `catalog.toml` and `RECIPE_CATALOG__*` variables
pub fn load_catalog() -> Result<Catalog, CatalogError> {
    let config = CatalogConfig::load()?;
    Catalog::from_config(&config)
}
