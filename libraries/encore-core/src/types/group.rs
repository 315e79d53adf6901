//! Sample group type

use super::sample::Sample;
use serde::{Deserialize, Serialize};

/// A named bucket of samples, deduplicated by title across sources
///
/// Groups are created when first referenced by title during a load and only
/// ever grow by appending samples; the empty title is a valid, distinct
/// identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleGroup {
    /// Group title; equality determines group identity
    pub title: String,

    /// The underlying event has concluded (rendered inactive by the chooser)
    pub concluded: bool,

    /// Samples in declaration order across all contributing sources
    pub samples: Vec<Sample>,
}

impl SampleGroup {
    /// Create an empty group
    pub fn new(title: impl Into<String>, concluded: bool) -> Self {
        Self {
            title: title.into(),
            concluded,
            samples: Vec::new(),
        }
    }
}
