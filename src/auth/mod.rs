//! Authentication and session management for the KillB API.
//!
//! The API authenticates with email and password (plus an optional API
//! key) and hands back a short-lived bearer token. A [`Session`] holds
//! the [`Credentials`], obtains that token on demand, tracks its expiry
//! against a [`Clock`], and logs in again when it runs out.
//!
//! ```no_run
//! use killb::{Credentials, Environment, KillbClient};
//!
//! # async fn example() -> killb::Result<()> {
//! let credentials = Credentials::new(Environment::Sandbox, "ops@example.com", "password")
//!     .with_api_key("api-key");
//! let client = KillbClient::login(credentials).await?;
//!
//! let session = client.session();
//! println!("token valid until {:?}", session.expires_at().await);
//! # Ok(())
//! # }
//! ```

mod clock;
mod credentials;
mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use credentials::{Credentials, ENV_API_KEY, ENV_EMAIL, ENV_ENVIRONMENT, ENV_PASSWORD};
pub use session::{AccessToken, Session, SessionState};
pub(crate) use session::API_KEY_HEADER;
