//! Login credentials.

use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::fmt;

use crate::{Environment, Error, Result};

/// Environment variable holding the environment tag.
pub const ENV_ENVIRONMENT: &str = "KILLB_ENVIRONMENT";
/// Environment variable holding the login email.
pub const ENV_EMAIL: &str = "KILLB_EMAIL";
/// Environment variable holding the login password.
pub const ENV_PASSWORD: &str = "KILLB_PASSWORD";
/// Environment variable holding the optional API key.
pub const ENV_API_KEY: &str = "KILLB_API_KEY";

/// Everything needed to log in: target environment, email, password and
/// an optional API key.
///
/// Immutable once built. The password and API key are never printed by
/// `Debug`.
///
/// # Example
///
/// ```
/// use killb::{Credentials, Environment};
///
/// let credentials = Credentials::new(Environment::Sandbox, "ops@example.com", "hunter2")
///     .with_api_key("key-123");
/// assert!(credentials.can_login());
/// ```
#[derive(Clone)]
pub struct Credentials {
    environment: Environment,
    email: String,
    password: SecretString,
    api_key: Option<SecretString>,
}

impl Credentials {
    /// Create credentials without an API key.
    pub fn new(
        environment: Environment,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            email: email.into(),
            password: SecretString::from(password.into()),
            api_key: None,
        }
    }

    /// Create credentials from a raw environment tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the tag is neither `SANDBOX`
    /// nor `PRODUCTION`.
    pub fn from_tag(
        tag: &str,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::new(tag.parse()?, email, password))
    }

    /// Attach an API key, sent as `x-api-key` on every call.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Read credentials from `KILLB_ENVIRONMENT`, `KILLB_EMAIL`,
    /// `KILLB_PASSWORD` and the optional `KILLB_API_KEY`.
    ///
    /// `KILLB_ENVIRONMENT` defaults to `SANDBOX` when unset.
    pub fn from_env() -> Result<Self> {
        let environment = match env::var(ENV_ENVIRONMENT) {
            Ok(tag) => tag.parse()?,
            Err(_) => Environment::default(),
        };
        let email = required_var(ENV_EMAIL)?;
        let password = required_var(ENV_PASSWORD)?;

        let mut credentials = Self::new(environment, email, password);
        if let Ok(api_key) = env::var(ENV_API_KEY) {
            if !api_key.is_empty() {
                credentials = credentials.with_api_key(api_key);
            }
        }
        Ok(credentials)
    }

    /// Target environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Login email.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn password(&self) -> &SecretString {
        &self.password
    }

    pub(crate) fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    /// Returns `true` if an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns `true` if both email and password are non-empty, i.e. the
    /// session can (re-)authenticate.
    pub fn can_login(&self) -> bool {
        !self.email.is_empty() && !self.password.expose_secret().is_empty()
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Configuration(format!("{} is not set", name)))
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("environment", &self.environment)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new(Environment::Sandbox, "a@b.c", "super-secret-password")
            .with_api_key("super-secret-key");
        let debug_str = format!("{:?}", credentials);

        assert!(debug_str.contains("a@b.c"));
        assert!(!debug_str.contains("super-secret-password"));
        assert!(!debug_str.contains("super-secret-key"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn test_can_login() {
        assert!(Credentials::new(Environment::Sandbox, "a@b.c", "pw").can_login());
        assert!(!Credentials::new(Environment::Sandbox, "", "pw").can_login());
        assert!(!Credentials::new(Environment::Sandbox, "a@b.c", "").can_login());
    }

    #[test]
    fn test_from_tag_rejects_unknown_environment() {
        let err = Credentials::from_tag("QA", "a@b.c", "pw").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let ok = Credentials::from_tag("PRODUCTION", "a@b.c", "pw").unwrap();
        assert_eq!(ok.environment(), Environment::Production);
    }
}
