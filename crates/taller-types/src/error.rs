//! Error types for taller

use thiserror::Error;

/// Failure taxonomy for the workshop model.
///
/// `InvalidArgument` is a caller input error; the other variants are
/// expected business outcomes the caller can match on and recover
/// from. Every variant carries a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),
}

pub type Result<T> = std::result::Result<T, Error>;
