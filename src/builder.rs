use std::cell::RefCell;
use std::path::PathBuf;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::favorites::{FavoritesStore, JsonFileFavorites, MemoryFavorites};
use crate::model::Recipe;
use crate::query::{CuisineGroup, QueryEngine, RecipeFilter};
use crate::repository::RecipeRepository;
use crate::scale::scale_recipe;

/// Where the catalog's recipes come from
#[derive(Debug, Clone)]
enum DatasetSource {
    Embedded,
    File(PathBuf),
    Json(String),
    Recipes(Vec<Recipe>),
}

/// Where favorites are kept
enum FavoritesSource {
    Memory,
    File(PathBuf),
    Store(Box<dyn FavoritesStore>),
}

/// A loaded recipe catalog with its random source and favorites store
///
/// This is the single object a display layer holds for a session.
pub struct Catalog {
    repository: RecipeRepository,
    rng: RefCell<StdRng>,
    favorites: Box<dyn FavoritesStore>,
}

impl Catalog {
    /// Creates a new builder for assembling a catalog
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::Catalog;
    ///
    /// let catalog = Catalog::builder().seed(42).build().unwrap();
    /// assert!(!catalog.all().is_empty());
    /// ```
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Assemble a catalog from loaded configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = Catalog::builder();
        if let Some(dataset) = &config.dataset {
            builder = builder.json_file(dataset);
        }
        if let Some(path) = &config.favorites_path {
            builder = builder.favorites_file(path);
        }
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }

    pub fn repository(&self) -> &RecipeRepository {
        &self.repository
    }

    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.repository)
    }

    pub fn all(&self) -> &[Recipe] {
        self.query().all()
    }

    pub fn by_id(&self, id: &str) -> Option<&Recipe> {
        self.query().by_id(id)
    }

    pub fn by_cuisine(&self, cuisine: &str) -> Vec<&Recipe> {
        self.query().by_cuisine(cuisine)
    }

    pub fn cuisines(&self) -> Vec<&str> {
        self.repository.cuisines()
    }

    pub fn popular(&self, limit: usize) -> Vec<&Recipe> {
        let mut rng = self.rng.borrow_mut();
        self.query().popular(limit, &mut *rng)
    }

    pub fn related(&self, exclude_id: &str, cuisine: &str, limit: usize) -> Vec<&Recipe> {
        let mut rng = self.rng.borrow_mut();
        self.query().related(exclude_id, cuisine, limit, &mut *rng)
    }

    /// Related recipes for `recipe`: same cuisine, never the recipe itself
    pub fn related_to(&self, recipe: &Recipe, limit: usize) -> Vec<&Recipe> {
        self.related(&recipe.id, &recipe.cuisine, limit)
    }

    pub fn search(&self, term: &str) -> Vec<&Recipe> {
        self.query().search(term)
    }

    pub fn filter(&self, filter: &RecipeFilter) -> Vec<&Recipe> {
        self.query().filter(filter)
    }

    pub fn grouped_by_cuisine(&self, per_cuisine: usize) -> Vec<CuisineGroup<'_>> {
        self.query().grouped_by_cuisine(per_cuisine)
    }

    /// Ingredient lines of recipe `id` scaled to `servings`, or `None` if unknown
    pub fn scaled_ingredients(
        &self,
        id: &str,
        servings: u32,
    ) -> Result<Option<Vec<String>>, CatalogError> {
        self.by_id(id)
            .map(|recipe| scale_recipe(recipe, servings))
            .transpose()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, CatalogError> {
        let state = self.favorites.toggle_favorite(id)?;
        debug!("Favorite '{}' is now {}", id, state);
        Ok(state)
    }

    /// Favorite recipes in the order they were added
    pub fn favorites(&self) -> Vec<&Recipe> {
        self.query().favorites(self.favorites.as_ref())
    }
}

/// Builder for configuring and loading a [`Catalog`]
pub struct CatalogBuilder {
    dataset: DatasetSource,
    favorites: FavoritesSource,
    seed: Option<u64>,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self {
            dataset: DatasetSource::Embedded,
            favorites: FavoritesSource::Memory,
            seed: None,
        }
    }
}

impl CatalogBuilder {
    /// Load recipes from a JSON dataset file
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::Catalog;
    ///
    /// let builder = Catalog::builder().json_file("data/recipes.json");
    /// ```
    pub fn json_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = DatasetSource::File(path.into());
        self
    }

    /// Load recipes from JSON text
    pub fn json_str(mut self, content: impl Into<String>) -> Self {
        self.dataset = DatasetSource::Json(content.into());
        self
    }

    /// Use already constructed recipes; they are still validated on build
    pub fn recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.dataset = DatasetSource::Recipes(recipes);
        self
    }

    /// Persist favorites to a JSON file
    pub fn favorites_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.favorites = FavoritesSource::File(path.into());
        self
    }

    /// Use a caller-provided favorites store
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::{Catalog, MemoryFavorites};
    ///
    /// let builder = Catalog::builder().favorites(MemoryFavorites::new());
    /// ```
    pub fn favorites(mut self, store: impl FavoritesStore + 'static) -> Self {
        self.favorites = FavoritesSource::Store(Box::new(store));
        self
    }

    /// Fix the seed of the random source used for popular and related picks
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load the dataset and open the favorites store
    ///
    /// # Errors
    /// Returns `CatalogError` if:
    /// - The dataset file cannot be read or is not valid JSON
    /// - Any recipe fails validation or two recipes share an id
    /// - The favorites file exists but cannot be read or parsed
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let repository = match self.dataset {
            DatasetSource::Embedded => RecipeRepository::embedded()?,
            DatasetSource::File(path) => RecipeRepository::from_path(path)?,
            DatasetSource::Json(content) => RecipeRepository::from_json_str(&content)?,
            DatasetSource::Recipes(recipes) => RecipeRepository::new(recipes)?,
        };

        let favorites: Box<dyn FavoritesStore> = match self.favorites {
            FavoritesSource::Memory => Box::new(MemoryFavorites::new()),
            FavoritesSource::File(path) => Box::new(JsonFileFavorites::open(path)?),
            FavoritesSource::Store(store) => store,
        };

        let rng = match self.seed {
            Some(seed) => {
                debug!("Seeding random source with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Ok(Catalog {
            repository,
            rng: RefCell::new(rng),
            favorites,
        })
    }
}
