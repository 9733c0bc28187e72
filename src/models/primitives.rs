//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! to prevent mixing up different kinds of IDs at compile time, plus the
//! [`Environment`] tag that selects the API host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// A strongly-typed user ID.
    ///
    /// # Example
    ///
    /// ```
    /// use killb::UserId;
    ///
    /// let user = UserId::new("usr_123");
    /// assert_eq!(user.as_str(), "usr_123");
    /// ```
    UserId
);

string_id!(
    /// A strongly-typed bank, wallet or SPEI account ID.
    AccountId
);

string_id!(
    /// A strongly-typed quotation ID.
    QuotationId
);

string_id!(
    /// A strongly-typed ramp ID.
    RampId
);

string_id!(
    /// A strongly-typed savings account ID.
    SavingsAccountId
);

/// Deployment target of the KillB API.
///
/// The set is closed: parsing any tag other than `SANDBOX` or `PRODUCTION`
/// fails with [`Error::Configuration`].
///
/// # Example
///
/// ```
/// use killb::Environment;
///
/// let env: Environment = "SANDBOX".parse().unwrap();
/// println!("API URL: {}", env.api_base_url());
/// assert!("STAGING".parse::<Environment>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Sandbox gateway for integration testing.
    #[default]
    Sandbox,
    /// Production environment - real money movement.
    Production,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://teste-94u93qnn.uc.gateway.dev",
            Environment::Production => "http://killb.app/api/v2",
        }
    }

    /// The tag this environment is parsed from.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Environment::Sandbox => "SANDBOX",
            Environment::Production => "PRODUCTION",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "SANDBOX" => Ok(Environment::Sandbox),
            "PRODUCTION" => Ok(Environment::Production),
            other => Err(Error::Configuration(format!(
                "Environment not supported: {:?}. Expected SANDBOX or PRODUCTION",
                other
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id() {
        let user = UserId::new("usr_123");
        assert_eq!(user.as_str(), "usr_123");
        assert_eq!(user.to_string(), "usr_123");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let ramp: RampId = "ramp_1".into();
        assert_eq!(serde_json::to_string(&ramp).unwrap(), "\"ramp_1\"");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://teste-94u93qnn.uc.gateway.dev"
        );
        assert_eq!(
            Environment::Production.api_base_url(),
            "http://killb.app/api/v2"
        );
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("SANDBOX".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!(
            "PRODUCTION".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            Environment::Production.to_string().parse::<Environment>().unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn test_environment_rejects_unknown_tags() {
        for tag in ["STAGING", "sandbox", "", "PROD"] {
            match tag.parse::<Environment>() {
                Err(Error::Configuration(msg)) => assert!(msg.contains("not supported")),
                other => panic!("Expected configuration error for {:?}, got {:?}", tag, other),
            }
        }
    }
}
