//! DRM configuration attached to top-level samples

use serde::{Deserialize, Serialize};

/// DRM configuration for a sample
///
/// Present only on samples that declared a `drm_scheme`; a sample without
/// DRM carries no `DrmInfo` rather than a defaulted one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrmInfo {
    /// Scheme identifier (e.g. "widevine", "playready")
    pub scheme: String,

    /// License server URL
    pub license_url: Option<String>,

    /// Key request headers as (name, value) pairs in declaration order.
    ///
    /// Kept as an ordered pair list rather than a map: consumers iterate the
    /// pairs positionally (flattened key,value encoding in the older wire
    /// format).
    #[serde(default)]
    pub key_request_properties: Vec<(String, String)>,

    /// Acquire a new license for each session
    pub multi_session: bool,
}

impl DrmInfo {
    /// Create a DRM configuration with only the scheme set
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            license_url: None,
            key_request_properties: Vec::new(),
            multi_session: false,
        }
    }
}
