// crates/usgeo-core/src/error.rs

use thiserror::Error;

/// Error type for loading and parsing the dataset.
///
/// Lookup misses are *not* errors: the query engine signals absence with
/// `Option`/empty results. `GeoError` only covers the load path.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The backing source is missing or unreadable. Surfaced at load time
    /// and never retried; the source is static, so a retry would not help.
    #[error("data source unavailable: {0}")]
    DataUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row's field count does not match the header. Only raised when the
    /// parser runs in strict mode; the default lenient mode degrades with
    /// empty-string fill instead.
    #[error("malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("binary dataset error: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "json")]
    #[error("JSON dataset error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoError>;
