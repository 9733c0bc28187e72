//! # killb-rs
//!
//! A Rust client for the KillB API: fiat/stablecoin ramps, payout
//! accounts, users, quotations and USD savings.
//!
//! The heart of the crate is the authenticated request layer. A
//! [`KillbClient`] logs in with email and password, caches the bearer
//! token, notices when it has expired and logs in again before the next
//! call. Every resource service funnels through the same
//! `request(method, endpoint, options)` contract.
//!
//! ## Features
//!
//! - **Authentication**: lazy login, exact expiry tracking, transparent refresh
//! - **Resources**: accounts, users, quotations, ramps and savings services
//! - **Type Safety**: strongly-typed models and identifier newtypes
//! - **Async-first**: built on Tokio and reqwest; clients are cheap to clone
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use killb::{Credentials, Environment, KillbClient};
//! use killb::models::{CashInMethod, CashOutMethod, Currency, NewQuotation};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> killb::Result<()> {
//!     let credentials = Credentials::new(Environment::Sandbox, "ops@example.com", "password")
//!         .with_api_key("api-key");
//!
//!     // Logs in immediately so bad credentials surface here
//!     let client = KillbClient::login(credentials).await?;
//!
//!     let quotation = client.quotations().create(&NewQuotation {
//!         from_currency: Currency::Cop,
//!         to_currency: Currency::Usdc,
//!         amount: Decimal::new(500_000, 0),
//!         amount_is_to_currency: false,
//!         cash_in_method: CashInMethod::Pse,
//!         cash_out_method: CashOutMethod::Polygon,
//!         skip_order: None,
//!     }).await?;
//!     println!("Quotation {} at rate {:?}", quotation.id, quotation.rate);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Raw Requests
//!
//! ```rust,no_run
//! use killb::{KillbClient, Method, RequestOptions};
//!
//! # async fn example() -> killb::Result<()> {
//! let client = KillbClient::from_tag("SANDBOX", "ops@example.com", "password", None)?;
//! let user = client
//!     .request(Method::GET, "users?limit=1", RequestOptions::new())
//!     .await?;
//! println!("{}", user);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{
    AccountId, Environment, QuotationId, RampId, SavingsAccountId, UserId,
};
pub use client::{ClientConfig, KillbClient, RequestOptions};
pub use auth::{Credentials, Session};

/// HTTP method accepted by [`KillbClient::request`].
pub use reqwest::Method;

/// Prelude module for convenient imports.
///
/// ```rust
/// use killb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        AccountId, Environment, QuotationId, RampId, SavingsAccountId, UserId,
        // Enums
        CashInMethod, CashOutMethod, Currency, DocumentType, UserType,
        // Requests
        AccountDetails, NewAccount, NewQuotation, NewRamp, NewUser, SavingsWithdrawal,
        // Responses
        Account, Quotation, Ramp, SavingsAccount, User,
    };
    pub use crate::client::{ClientConfig, KillbClient, RequestOptions};
    pub use crate::Method;
    pub use crate::auth::{Credentials, Session, SessionState};
}
