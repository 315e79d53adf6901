//! Sample entry types
//!
//! A sample is a single playable entry: either a direct URI or a playlist
//! of URIs played back to back.

use super::drm::DrmInfo;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fields shared by both sample variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleInfo {
    /// Display name (empty when the source declared none)
    pub name: String,

    /// Prefer extension decoders over platform decoders
    pub prefer_extension_decoders: bool,

    /// Adaptive-bitrate algorithm identifier, passed through opaquely
    pub abr_algorithm: Option<String>,

    /// DRM configuration, present only when the source declared a scheme
    pub drm: Option<DrmInfo>,
}

impl SampleInfo {
    /// Create sample info with only the name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefer_extension_decoders: false,
            abr_algorithm: None,
            drm: None,
        }
    }
}

/// A sample played from a single URI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UriSample {
    /// Shared sample fields
    pub info: SampleInfo,

    /// Playback URI. Left mutable: a token-exchange step may rewrite it in
    /// place after the catalog is loaded.
    pub uri: String,

    /// The URI may be edited in the chooser before playback
    pub editable: bool,

    /// Container extension hint for format inference
    pub extension: Option<String>,

    /// Scheduled start of the underlying event
    pub start_date_time: Option<DateTime<FixedOffset>>,

    /// VAST ad tag URI
    pub ad_tag_uri: Option<String>,
}

/// A playlist of URI samples, played back to back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSample {
    /// Shared sample fields
    pub info: SampleInfo,

    /// Children are always direct URI samples: playlists do not nest
    pub children: Vec<UriSample>,
}

/// A single playable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Sample {
    /// Direct URI sample
    Uri(UriSample),

    /// Playlist of URI samples
    Playlist(PlaylistSample),
}

impl Sample {
    /// Shared fields of either variant
    pub fn info(&self) -> &SampleInfo {
        match self {
            Sample::Uri(sample) => &sample.info,
            Sample::Playlist(sample) => &sample.info,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.info().name
    }
}
