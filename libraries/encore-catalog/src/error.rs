/// Catalog-specific errors
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while reading a catalog source
///
/// Any of these aborts the source being parsed; the loader records the
/// failure and moves on to the next source.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Field name outside the catalog schema
    #[error("Unsupported field: {0}")]
    UnsupportedField(String),

    /// Field that is not legal on a nested playlist entry
    #[error("Invalid field on nested playlist entry: {0}")]
    InvalidNesting(String),

    /// startDateTime value that is not a zoned ISO-8601 timestamp
    #[error("Invalid timestamp: {0}")]
    DateParse(String),

    /// JSON shape that does not match the catalog schema
    #[error("Invalid catalog structure: {0}")]
    InvalidStructure(String),

    /// Malformed JSON text
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Source read error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CatalogError> for encore_core::EncoreError {
    fn from(err: CatalogError) -> Self {
        encore_core::EncoreError::catalog(err.to_string())
    }
}
