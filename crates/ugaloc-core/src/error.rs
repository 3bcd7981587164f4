// crates/ugaloc-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LocError>;

/// All failure modes of the crate, in one flat enum.
///
/// Lookup operations never produce an error for "not found at this level" —
/// they return empty slices instead. The variants here cover dataset loading,
/// call sequencing and geocoding.
#[derive(Debug, Error)]
pub enum LocError {
    /// The dataset source could not be reached (missing file, dead URL).
    #[error("{0}")]
    NotFound(String),

    /// I/O failure while reading a dataset document.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The dataset document is not well-formed (bad JSON, missing keys).
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Caller-supplied input that cannot be interpreted.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A lookup was attempted before a successful `init()`.
    #[error("selector not initialized: call init() before any lookup")]
    NotInitialized,

    /// The geocoding query was empty. Raised before any network activity.
    #[error("geocoding query must not be empty")]
    EmptyQuery,

    /// The geocoding service answered, but with zero candidates.
    #[error("no coordinates found for location: {0}")]
    NoMatch(String),

    /// Transport-level geocoding failure (connection, HTTP status, decode).
    #[cfg(feature = "fetch")]
    #[error("geocoding service unavailable: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoding service returned a payload we cannot interpret.
    #[error("geocoding response invalid: {0}")]
    BadGeocodeResponse(String),
}
