//! Error types for jobglean.
//!
//! Extraction itself never fails: internal faults degrade to missing fields
//! or empty keyword lists. The error type below covers the explicitly
//! fallible surface - JSON round-trips for records, keyword lists, and
//! custom dictionaries.

/// Error type for serialization and dictionary-loading operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON encoding or decoding failed.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A custom keyword dictionary parsed as JSON but is unusable.
    #[error("Invalid keyword dictionary: {0}")]
    InvalidDictionary(String),
}

/// Result type alias for the fallible surface.
pub type Result<T> = std::result::Result<T, Error>;
