//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `pf-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A configuration field is out of its accepted range.  Raised at engine
    /// construction; nothing is silently clamped.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        field:  &'static str,
        reason: String,
    },
}

/// Shorthand result type for `pf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
