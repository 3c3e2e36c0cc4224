use super::{toggle_in, FavoritesStore};
use crate::error::CatalogError;

/// Favorites kept for the lifetime of the process only
#[derive(Debug, Clone, Default)]
pub struct MemoryFavorites {
    ids: Vec<String>,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesStore for MemoryFavorites {
    fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    fn toggle_favorite(&mut self, id: &str) -> Result<bool, CatalogError> {
        Ok(toggle_in(&mut self.ids, id))
    }

    fn ids(&self) -> &[String] {
        &self.ids
    }
}
