//! taskboard API - REST client for the task backend
//!
//! One seam, one implementation:
//! - [`TaskApi`] is the trait every consumer programs against
//! - [`HttpTaskApi`] issues the actual REST calls via reqwest
//!
//! Configuration comes from the environment ([`ApiConfig::from_env`])
//! and its absence is fatal; there is no default endpoint.
//!
//! With the `mocks` feature (or inside this crate's tests) the
//! [`MockTaskApi`] double generated by mockall is available for
//! downstream test suites.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;

// Re-exports for convenience
#[cfg(any(test, feature = "mocks"))]
pub use client::MockTaskApi;
pub use client::{HttpTaskApi, TaskApi};
pub use config::{ApiConfig, ConfigError, BASE_URL_VAR};
pub use decode::decode_list;
pub use error::ApiError;
