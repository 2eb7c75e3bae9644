//! In-memory catalog source.

use async_trait::async_trait;
use stackfast_core::ToolProfile;

use super::{CatalogSource, Result};

/// Catalog source over a fixed list of tools.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    tools: Vec<ToolProfile>,
}

impl InMemoryCatalog {
    /// Wrap a list of tools.
    pub fn new(tools: Vec<ToolProfile>) -> Self {
        Self { tools }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn load(&self) -> Result<Vec<ToolProfile>> {
        Ok(self.tools.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} tools)", self.tools.len())
    }
}
