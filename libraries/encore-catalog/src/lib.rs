//! Encore Player Catalog
//!
//! Catalog loading for Encore Player.
//!
//! This crate provides:
//! - Parsing of `.exolist.json`-style sample lists into typed groups
//! - Validation of the catalog schema (unknown fields, playlist nesting,
//!   fields that are only legal on top-level samples)
//! - Title-based merging of groups across multiple sources
//! - A sequential loader that runs off the interactive thread and delivers
//!   its result once
//!
//! # Example
//!
//! ```rust
//! use encore_catalog::parse_catalog_str;
//!
//! let mut groups = Vec::new();
//! parse_catalog_str(
//!     r#"[
//!         {
//!             "name": "Group stage",
//!             "samples": [
//!                 { "name": "Match 1", "uri": "https://media.example.com/m1.mpd" }
//!             ]
//!         }
//!     ]"#,
//!     &mut groups,
//! )?;
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].samples[0].name(), "Match 1");
//! # Ok::<(), encore_catalog::CatalogError>(())
//! ```

mod discovery;
mod error;
mod loader;
mod merger;
mod parser;
mod source;

pub use discovery::{discover_sources, DiscoveryConfig};
pub use error::{CatalogError, Result};
pub use loader::{load_catalog, spawn_load, CatalogLoad};
pub use parser::{parse_catalog, parse_catalog_str};
pub use source::{CatalogSource, FileSource, MemorySource};
