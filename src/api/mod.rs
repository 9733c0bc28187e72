//! API service modules for KillB endpoints.
//!
//! Each service maps method calls onto the client's single authenticated
//! `request` contract for one resource family. Services hold no state of
//! their own.

mod accounts;
mod quotations;
mod ramps;
mod savings;
mod users;

pub use accounts::AccountsService;
pub use quotations::QuotationsService;
pub use ramps::RampsService;
pub use savings::SavingsService;
pub use users::UsersService;
