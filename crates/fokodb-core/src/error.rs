// crates/fokodb-core/src/error.rs
use thiserror::Error;

/// Errors raised by the ambient layers of the crate (loading, parsing levels).
///
/// The search engine itself is total and never returns one of these.
#[derive(Debug, Error)]
pub enum FokoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown administrative level: {0:?}")]
    UnknownLevel(String),
}

pub type Result<T> = std::result::Result<T, FokoError>;
