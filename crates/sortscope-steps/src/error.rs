//! Error types for the step engine boundary.

use thiserror::Error;

/// Result type for sortscope-steps operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the crate boundary.
///
/// Algorithm identifiers are a closed enum inside the crate; this error only
/// exists for text arriving from untrusted sources (CLI args, config files).
#[derive(Debug, Error)]
pub enum Error {
    /// Identifier does not name a supported algorithm
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
