//! Data models for the KillB API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Identifier newtypes and the [`Environment`] tag
//! - [`enums`] - Currencies, rails, document kinds, statuses
//! - [`account`] - PSE, wallet and SPEI accounts
//! - [`user`] - Person and company users
//! - [`quotation`] - Firm and simulated quotations
//! - [`ramp`] - Ramps (executed quotations)
//! - [`savings`] - Savings accounts, withdrawals and balances
//!
//! Request bodies serialize to the API's camelCase shape. Response models
//! are lenient: optional fields default, and free-form sections are kept
//! as [`serde_json::Value`].

pub mod primitives;
pub mod enums;
pub mod account;
pub mod user;
pub mod quotation;
pub mod ramp;
pub mod savings;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use account::*;
pub use user::*;
pub use quotation::*;
pub use ramp::*;
pub use savings::*;
