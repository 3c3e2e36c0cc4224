mod json_file;
mod memory;

pub use json_file::JsonFileFavorites;
pub use memory::MemoryFavorites;

use crate::error::CatalogError;

/// Set of recipe ids the user has marked as favorites
///
/// Toggling is idempotent per call: one membership test followed by exactly
/// one insert or remove, so an id is never stored twice.
pub trait FavoritesStore: Send {
    fn is_favorite(&self, id: &str) -> bool;

    /// Flip membership of `id` and return the new state
    fn toggle_favorite(&mut self, id: &str) -> Result<bool, CatalogError>;

    /// Stored ids in insertion order
    fn ids(&self) -> &[String];
}

/// Flip membership of `id` in an ordered id list
pub(crate) fn toggle_in(ids: &mut Vec<String>, id: &str) -> bool {
    match ids.iter().position(|existing| existing == id) {
        Some(position) => {
            ids.remove(position);
            false
        }
        None => {
            ids.push(id.to_string());
            true
        }
    }
}
