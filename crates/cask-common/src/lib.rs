//! Shared types for the cask client ecosystem.
//!
//! Defines the HTTP vocabulary (`HttpMethod`, `HttpStatus`) and the
//! `Service` transport contract that `cask-base` consumes and
//! `cask-http` implements.

pub mod http;
pub mod service;

pub use http::{HttpMethod, HttpStatus};
pub use service::{Service, TransportError};
