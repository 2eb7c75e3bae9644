//! Catalog source trait abstraction.

use async_trait::async_trait;
use stackfast_core::ToolProfile;

/// Error type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries share an id
    #[error("Duplicate tool id: {0}")]
    DuplicateId(String),

    /// Catalog location does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Where tool profiles come from.
///
/// Sources return raw entries; [`crate::Catalog`] validates them.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every tool profile.
    async fn load(&self) -> Result<Vec<ToolProfile>>;

    /// Human-readable description of the source, for logs.
    fn describe(&self) -> String;
}
