//! Encore Player Core
//!
//! Platform-agnostic domain types and error handling for Encore Player.
//!
//! This crate provides the foundational building blocks shared by the
//! catalog loader and the presentation layer.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `SampleGroup`, `Sample`, `DrmInfo`, etc.
//! - **Error Handling**: Unified `EncoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use encore_core::{Sample, SampleGroup, SampleInfo, UriSample};
//!
//! // Create a group
//! let mut group = SampleGroup::new("World Cup", false);
//!
//! // Append a direct URI sample
//! group.samples.push(Sample::Uri(UriSample {
//!     info: SampleInfo::new("Opening match"),
//!     uri: "https://media.example.com/opening.mpd".to_string(),
//!     editable: false,
//!     extension: None,
//!     start_date_time: None,
//!     ad_tag_uri: None,
//! }));
//!
//! assert_eq!(group.samples[0].name(), "Opening match");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{EncoreError, Result};

// Export all types
pub use types::{DrmInfo, PlaylistSample, Sample, SampleGroup, SampleInfo, UriSample};
