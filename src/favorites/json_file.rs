use super::{toggle_in, FavoritesStore};
use crate::error::CatalogError;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Favorites persisted as a JSON array of recipe ids
///
/// The file is read once on open and rewritten after every toggle.
#[derive(Debug, Clone)]
pub struct JsonFileFavorites {
    path: PathBuf,
    ids: Vec<String>,
}

impl JsonFileFavorites {
    /// Open the store at `path`; a missing file is an empty set
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let ids = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => dedup(serde_json::from_str::<Vec<String>>(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No favorites file at {}, starting with an empty set",
                    path.display()
                );
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Loaded {} favorites from {}", ids.len(), path.display());
        Ok(Self { path, ids })
    }

    fn persist(&self) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string(&self.ids)?)?;
        Ok(())
    }
}

/// Drop repeated ids a hand-edited file may contain, keeping the first
fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

impl FavoritesStore for JsonFileFavorites {
    fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    fn toggle_favorite(&mut self, id: &str) -> Result<bool, CatalogError> {
        let state = toggle_in(&mut self.ids, id);
        if let Err(e) = self.persist() {
            // Keep memory consistent with what is on disk
            toggle_in(&mut self.ids, id);
            return Err(e);
        }
        Ok(state)
    }

    fn ids(&self) -> &[String] {
        &self.ids
    }
}
