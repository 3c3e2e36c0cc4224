use thiserror::Error;

/// Errors that can occur while loading the catalog or scaling quantities
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Scaling requested with a zero serving count
    #[error("Invalid servings: cannot scale from {original} to {target} servings")]
    InvalidServings { original: u32, target: u32 },

    /// A dataset entry failed validation at load time
    #[error("Invalid recipe '{id}': {reason}")]
    InvalidRecipe { id: String, reason: String },

    /// Two dataset entries share the same id
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),

    /// Failed to read or write a dataset or favorites file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a dataset or favorites file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CatalogError {
    pub(crate) fn invalid_recipe(id: &str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidRecipe {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
