//! cask-http: signed HTTP transport for the cask base client
//!
//! Implements the `Service` contract from `cask-common` on top of
//! reqwest: per-collection root URL construction, API-key signing, JSON
//! body handling and a fixed request timeout. Status-code interpretation
//! is left to the caller.

pub mod config;
pub mod service;

pub use config::ServiceConfig;
pub use service::HttpService;
