//! Tool catalog loading for StackFast.
//!
//! This crate provides a trait-based catalog source with a JSON file
//! implementation and an in-memory one for tests and embedding.

#![warn(missing_docs)]

pub mod trait_;
pub mod catalog;
pub mod json_catalog;
pub mod memory;

pub use trait_::{CatalogSource, CatalogError, Result};
pub use catalog::Catalog;
pub use json_catalog::JsonCatalog;
pub use memory::InMemoryCatalog;
