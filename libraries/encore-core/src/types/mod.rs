//! Domain types for the sample catalog

mod drm;
mod group;
mod sample;

pub use drm::DrmInfo;
pub use group::SampleGroup;
pub use sample::{PlaylistSample, Sample, SampleInfo, UriSample};
