//! cask-base: client for a hosted key-value/document base
//!
//! Translates method calls (get, put, insert, update, delete, fetch,
//! put_many) into signed REST requests against a fixed API surface and
//! maps status codes and response bodies back into typed results or
//! errors. The HTTP channel itself lives in `cask-http`; any
//! [`Service`] implementation can stand in for it.
//!
//! # Example
//!
//! ```ignore
//! use cask_base::{Base, Expires, FetchParams};
//! use cask_http::ServiceConfig;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let base = Base::new(ServiceConfig::new("books", "project-key", "project-id"))?;
//!
//!     base.put(json!({"title": "dune"}), Some("book-1"), Expires::Never).await?;
//!     let item = base.get("book-1").await?;
//!     println!("{item}");
//!
//!     let page = base.fetch(FetchParams::new().query(json!({"title": "dune"}))).await?;
//!     println!("{} items", page.len());
//!     Ok(())
//! }
//! ```

pub mod base;
pub mod error;
pub mod fetch;
pub mod ttl;
pub mod update;

pub use base::{Base, MAX_BATCH_SIZE};
pub use error::{BaseError, Result};
pub use fetch::{FetchParams, FetchResponse, DEFAULT_FETCH_LIMIT};
pub use ttl::{ExpireAt, Expires, TTL_ATTRIBUTE};
pub use update::{UpdateOp, UpdatePayload, Updates};

// Re-export the transport seam for callers plugging in their own channel
pub use cask_common::{HttpMethod, HttpStatus, Service, TransportError};
