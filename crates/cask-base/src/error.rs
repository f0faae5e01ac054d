//! Error types for base operations

use cask_common::TransportError;
use serde_json::Value;
use thiserror::Error;

/// Result type alias for base operations
pub type Result<T> = std::result::Result<T, BaseError>;

/// Errors surfaced by base operations.
///
/// Everything surfaces synchronously to the immediate caller; nothing is
/// swallowed or retried inside this crate.
#[derive(Error, Debug)]
pub enum BaseError {
    /// Rejected locally; no request was issued
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The key does not exist server-side
    #[error("key '{key}' not found")]
    NotFound { key: String },

    /// Create-only insert hit an existing key
    #[error("item with key '{key}' already exists")]
    AlreadyExists { key: String },

    /// Any other non-success status, with the decoded error body for
    /// diagnostics
    #[error("request failed with status {status}")]
    RequestFailure { status: u16, body: Option<Value> },

    /// The channel itself failed before a status code was available
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
