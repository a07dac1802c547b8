//! Error types for data type parsing and collaborator arrays.
//!
//! The setters themselves never fail. Errors only come from strict
//! data type parsing and from building complex arrays out of raw buffers.

use thiserror::Error;

/// Setter crate error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetterError {
    /// A data type tag outside the known set was parsed strictly
    #[error("unknown array data type: {0}")]
    UnknownDType(String),

    /// An interleaved complex buffer did not hold whole (re, im) pairs
    #[error("interleaved complex buffer must have an even length, got {0}")]
    OddInterleavedLength(usize),
}

impl SetterError {
    /// Create an unknown data type error
    pub fn unknown_dtype<S: Into<String>>(tag: S) -> Self {
        SetterError::UnknownDType(tag.into())
    }

    /// Create an odd interleaved length error
    pub fn odd_interleaved_length(len: usize) -> Self {
        SetterError::OddInterleavedLength(len)
    }
}

/// Result type alias for fallible setter crate operations
pub type SetterResult<T> = Result<T, SetterError>;
