//! HTTP client and service layer for the KillB API.
//!
//! This module provides the main entry point [`KillbClient`] and the
//! single dispatch contract every resource service is built on:
//! `request(method, endpoint, options) -> parsed body`.
//!
//! # Example
//!
//! ```no_run
//! use killb::{ClientConfig, Credentials, Environment, KillbClient, Method, RequestOptions};
//!
//! # async fn example() -> killb::Result<()> {
//! let client = KillbClient::new(
//!     Credentials::new(Environment::Sandbox, "ops@example.com", "password"),
//!     ClientConfig::default(),
//! )?;
//!
//! // Logs in on first use
//! let user = client.request(Method::GET, "users/u1", RequestOptions::new()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod request;

pub use config::ClientConfig;
pub use http::KillbClient;
pub use request::RequestOptions;
pub(crate) use http::ClientInner;
