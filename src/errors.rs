//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by the concrete curve
//! backend (point and scalar encoding) as well as the high-level `Error` type
//! used across the key, scaler and encryption APIs.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code.
//!
//! # Examples
//!
//! ```rust
//! use tpke::errors::{BackendError, Error};
//!
//! let err: Error = BackendError::Serialization("invalid G1 point").into();
//! assert!(matches!(err, Error::Decode(_)));
//! ```

use thiserror::Error;

/// Errors bubbled up from the curve backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// High-level errors returned by the public API.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("decode error: {0}")]
    Decode(#[from] BackendError),
    #[error("unimplemented: {0}")]
    Unimplemented(&'static str),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("scaler search cancelled")]
    Cancelled,
    #[error("symmetric cipher failure: {0}")]
    Symmetric(&'static str),
}
