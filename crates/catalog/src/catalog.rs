//! Validated, read-only tool catalog.

use std::collections::HashSet;

use stackfast_core::{ToolCategory, ToolProfile};
use tracing::{info, warn};

use super::{CatalogError, CatalogSource, Result};

/// A tool catalog with unique ids, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tools: Vec<ToolProfile>,
}

impl Catalog {
    /// Validate a list of tools.
    pub fn new(tools: Vec<ToolProfile>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.id.as_str()) {
                return Err(CatalogError::DuplicateId(tool.id.clone()));
            }
            if !(0.0..=1.0).contains(&tool.popularity_score) {
                warn!(
                    "Tool {} has popularity {} outside [0, 1]",
                    tool.id, tool.popularity_score
                );
            }
        }
        Ok(Self { tools })
    }

    /// Load and validate from a source.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        let catalog = Self::new(source.load().await?)?;
        info!("Loaded {} tools from {}", catalog.len(), source.describe());
        Ok(catalog)
    }

    /// All tools.
    pub fn tools(&self) -> &[ToolProfile] {
        &self.tools
    }

    /// Look up a tool by id.
    pub fn get(&self, id: &str) -> Option<&ToolProfile> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Tools in one category.
    pub fn by_category(&self, category: ToolCategory) -> impl Iterator<Item = &ToolProfile> {
        self.tools.iter().filter(move |t| t.category == category)
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl AsRef<[ToolProfile]> for Catalog {
    fn as_ref(&self) -> &[ToolProfile] {
        &self.tools
    }
}
