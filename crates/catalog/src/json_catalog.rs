//! JSON file catalog source.
//!
//! A catalog is either one JSON file or a directory of them. Each file holds
//! a bare array of tool profiles, a `{"tools": [...]}` object, or a single
//! tool profile.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use stackfast_core::ToolProfile;
use tokio::fs;
use tracing::{debug, warn};

use super::{CatalogError, CatalogSource, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<ToolProfile>),
    Wrapped { tools: Vec<ToolProfile> },
    Single(Box<ToolProfile>),
}

impl CatalogFile {
    fn into_tools(self) -> Vec<ToolProfile> {
        match self {
            CatalogFile::List(tools) | CatalogFile::Wrapped { tools } => tools,
            CatalogFile::Single(tool) => vec![*tool],
        }
    }
}

/// File-based JSON catalog source.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    /// Catalog at a file or directory path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse catalog JSON text.
    pub fn parse(json: &str) -> Result<Vec<ToolProfile>> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(file.into_tools())
    }
}

#[async_trait]
impl CatalogSource for JsonCatalog {
    async fn load(&self) -> Result<Vec<ToolProfile>> {
        let metadata = match fs::metadata(&self.path).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if metadata.is_dir() {
            load_dir(&self.path).await
        } else {
            read_catalog_file(&self.path).await
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

async fn read_catalog_file(path: &Path) -> Result<Vec<ToolProfile>> {
    let json = fs::read_to_string(path).await?;
    let tools = JsonCatalog::parse(&json)?;
    debug!("Read {} tools from {}", tools.len(), path.display());
    Ok(tools)
}

/// Files are read in name order; unparseable files are skipped.
async fn load_dir(dir: &Path) -> Result<Vec<ToolProfile>> {
    let mut paths = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut tools = Vec::new();
    for path in paths {
        match read_catalog_file(&path).await {
            Ok(found) => tools.extend(found),
            Err(e) => warn!("Skipping catalog file {}: {}", path.display(), e),
        }
    }
    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOOL: &str = r#"{
        "id": "react", "name": "React", "category": "frontend",
        "skill": {"setup": 2, "daily": 3}, "pricing_model": "free",
        "popularity_score": 0.95
    }"#;

    #[test]
    fn test_parse_shapes() {
        assert_eq!(JsonCatalog::parse(&format!("[{}]", TOOL)).unwrap().len(), 1);
        assert_eq!(JsonCatalog::parse(&format!(r#"{{"tools": [{0}, {0}]}}"#, TOOL)).unwrap().len(), 2);
        assert_eq!(JsonCatalog::parse(TOOL).unwrap()[0].id, "react");
        assert!(matches!(JsonCatalog::parse("{\"nope\": 1}"), Err(CatalogError::Json(_))));
    }

    #[tokio::test]
    async fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.json");
        std::fs::write(&path, format!("[{}]", TOOL)).unwrap();

        let tools = JsonCatalog::new(&path).load().await.unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "React");
    }

    #[tokio::test]
    async fn test_load_dir_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), TOOL.replace("react", "vue")).unwrap();
        std::fs::write(dir.path().join("a.json"), format!("[{}]", TOOL)).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let tools = JsonCatalog::new(dir.path()).load().await.unwrap();
        let ids: Vec<_> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["react", "vue"]);
    }

    #[tokio::test]
    async fn test_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCatalog::new(dir.path().join("absent.json")).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
