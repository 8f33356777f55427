//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where they
//! need to surface a configuration problem.

use thiserror::Error;

/// The top-level error type for `rn-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
