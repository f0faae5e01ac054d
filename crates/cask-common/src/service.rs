//! Transport contract between the base client and the HTTP layer.

use crate::http::{HttpMethod, HttpStatus};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by a [`Service`] implementation.
///
/// These cover the channel itself (connection, timeout, malformed
/// response bytes). HTTP status codes are not errors at this level; they
/// are returned to the caller for interpretation.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection failed (DNS, TCP, TLS)
    #[error("connection error: {0}")]
    Connection(String),

    /// Request timeout
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Invalid request or service configuration
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Response body could not be decoded
    #[error("response decode error: {0}")]
    Decode(String),
}

/// A signed HTTP channel to one base collection.
///
/// Implementations own the URL up to the collection root, credential
/// signing, timeouts and connection pooling. Callers own the path below
/// the root, the method, and the body, and interpret the returned status
/// code themselves.
#[async_trait]
pub trait Service: Send + Sync {
    /// Issue one signed request and return the status code together with
    /// the decoded JSON body, if the response carried one.
    async fn request(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<Value>,
    ) -> Result<(HttpStatus, Option<Value>), TransportError>;
}
