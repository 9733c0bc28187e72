//! Session management for KillB API authentication.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::clock::Clock;
use super::credentials::Credentials;
use crate::{Environment, Error, Result};

/// Header carrying the API key.
pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// A bearer token together with the instant it stops being valid.
///
/// Token and expiry travel as one value, so a reader can never observe
/// one without the other.
#[derive(Clone)]
pub struct AccessToken {
    token: SecretString,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub(crate) fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            expires_at,
        }
    }

    /// Instant after which the token is considered expired.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// The raw token, for building the `Authorization` header.
    pub(crate) fn secret(&self) -> &str {
        self.token.expose_secret()
    }

    /// Returns `true` if `now` is strictly after the expiry minus `buffer`.
    pub fn is_expired_at(&self, now: DateTime<Utc>, buffer: Duration) -> bool {
        match self.expires_at.checked_sub_signed(buffer) {
            Some(deadline) => now > deadline,
            // Deadline falls outside the representable range.
            None => buffer > Duration::zero(),
        }
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Authentication state of a [`Session`].
///
/// `Unauthenticated` at construction, `Authenticating` while a login call
/// is in flight, `Authenticated` once a token has been obtained. A token
/// stays usable while a later login is in flight, and is only replaced by
/// a successful one. A failed login restores whatever state preceded it.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// No token has been obtained yet.
    #[default]
    Unauthenticated,
    /// A login call is in flight; carries the token held before it, if any.
    Authenticating(Option<AccessToken>),
    /// A token is held (it may have expired since).
    Authenticated(AccessToken),
}

impl SessionState {
    /// The held token, if any, including one kept during a login.
    pub fn token(&self) -> Option<&AccessToken> {
        match self {
            SessionState::Authenticated(token) => Some(token),
            SessionState::Authenticating(previous) => previous.as_ref(),
            SessionState::Unauthenticated => None,
        }
    }

    /// Returns `true` if a token is held, expired or not.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Authentication session for the KillB API.
///
/// The session owns the credentials and the token state. It logs in on
/// demand and refreshes the token when it has expired.
///
/// # Thread Safety
///
/// `Session` is cheap to clone and safe to share across tasks. The
/// check-expiry / log-in / read-token sequence runs under a single gate,
/// so concurrent callers that all find the token expired trigger one
/// login between them.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    credentials: Credentials,
    base_url: String,
    http: reqwest::Client,
    clock: Arc<dyn Clock>,
    expiry_buffer: Duration,
    state: RwLock<SessionState>,
    refresh_gate: Mutex<()>,
}

impl Session {
    pub(crate) fn new(
        credentials: Credentials,
        base_url: String,
        http: reqwest::Client,
        clock: Arc<dyn Clock>,
        expiry_buffer: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                credentials,
                base_url,
                http,
                clock,
                expiry_buffer,
                state: RwLock::new(SessionState::Unauthenticated),
                refresh_gate: Mutex::new(()),
            }),
        }
    }

    /// Snapshot of the current authentication state.
    pub async fn state(&self) -> SessionState {
        self.inner.state.read().await.clone()
    }

    /// Returns `true` if no token is held, or the current time is past its
    /// expiry.
    pub async fn is_token_expired(&self) -> bool {
        self.current_token().await.is_none()
    }

    /// Expiry of the held token, if any.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner
            .state
            .read()
            .await
            .token()
            .map(AccessToken::expires_at)
    }

    /// Log in and replace the held token.
    ///
    /// Posts the email and password form-encoded to `auth/login`, with the
    /// API key (if any) in `x-api-key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the API answers with a
    /// non-2xx status or a body without `accessToken`/`expiresIn`.
    pub async fn authenticate(&self) -> Result<()> {
        let _gate = self.inner.refresh_gate.lock().await;
        self.authenticate_locked().await.map(|_| ())
    }

    /// Log in again with the stored credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] without touching the network if
    /// the email or password is empty.
    pub async fn refresh_token(&self) -> Result<()> {
        let _gate = self.inner.refresh_gate.lock().await;
        self.refresh_locked().await.map(|_| ())
    }

    /// Get the environment this session is connected to.
    pub fn environment(&self) -> Environment {
        self.inner.credentials.environment()
    }

    /// Base URL all calls are made against.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Credentials this session logs in with.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Return a usable token, refreshing first if the held one is missing
    /// or expired.
    pub(crate) async fn valid_token(&self) -> Result<AccessToken> {
        if let Some(token) = self.current_token().await {
            return Ok(token);
        }

        let _gate = self.inner.refresh_gate.lock().await;
        // Another task may have refreshed while this one waited on the gate.
        if let Some(token) = self.current_token().await {
            return Ok(token);
        }

        debug!("Access token missing or expired; refreshing");
        self.refresh_locked().await
    }

    /// Replace a token the API rejected, unless another task already did.
    pub(crate) async fn force_refresh(&self, rejected: &AccessToken) -> Result<AccessToken> {
        let _gate = self.inner.refresh_gate.lock().await;
        if let Some(token) = self.current_token().await {
            if token.secret() != rejected.secret() {
                return Ok(token);
            }
        }
        self.refresh_locked().await
    }

    async fn current_token(&self) -> Option<AccessToken> {
        let now = self.inner.clock.now();
        self.inner
            .state
            .read()
            .await
            .token()
            .filter(|token| !token.is_expired_at(now, self.inner.expiry_buffer))
            .cloned()
    }

    // Callers must hold `refresh_gate`.
    async fn refresh_locked(&self) -> Result<AccessToken> {
        if !self.inner.credentials.can_login() {
            warn!("Token refresh requested without credentials");
            return Err(Error::Authentication(
                "Cannot refresh token without credentials".to_string(),
            ));
        }
        self.authenticate_locked().await
    }

    // Callers must hold `refresh_gate`. If this future is dropped mid-login
    // the previous token stays in `Authenticating` and remains usable.
    async fn authenticate_locked(&self) -> Result<AccessToken> {
        let previous = {
            let mut state = self.inner.state.write().await;
            let held = state.token().cloned();
            std::mem::replace(&mut *state, SessionState::Authenticating(held))
        };

        match self.login().await {
            Ok(token) => {
                info!(expires_at = %token.expires_at, "Authenticated with KillB API");
                *self.inner.state.write().await = SessionState::Authenticated(token.clone());
                Ok(token)
            }
            Err(err) => {
                warn!(error = %err, "KillB login failed");
                *self.inner.state.write().await = previous;
                Err(err)
            }
        }
    }

    async fn login(&self) -> Result<AccessToken> {
        let credentials = &self.inner.credentials;
        let url = format!("{}/auth/login", self.inner.base_url);
        debug!(email = credentials.email(), %url, "Logging in");

        let mut request = self.inner.http.post(&url).form(&[
            ("email", credentials.email()),
            ("password", credentials.password().expose_secret()),
        ]);
        if let Some(api_key) = credentials.api_key() {
            request = request.header(API_KEY_HEADER, api_key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Authentication(format!(
                "Login failed ({}): {}",
                status.as_u16(),
                body
            )));
        }

        let login: LoginResponse = serde_json::from_str(&body).map_err(|e| {
            Error::Authentication(format!("Unexpected login response ({}): {}", e, body))
        })?;

        let expires_at = token_lifetime(login.expires_in)
            .and_then(|lifetime| self.inner.clock.now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                Error::Authentication(format!(
                    "Unexpected login response (expiresIn out of range: {}): {}",
                    login.expires_in, body
                ))
            })?;

        Ok(AccessToken::new(login.access_token, expires_at))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("credentials", &self.inner.credentials)
            .field("base_url", &self.inner.base_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
    // Seconds; the API may send it as an integer or a float.
    expires_in: f64,
}

/// Convert a lifetime in (possibly fractional) seconds to a duration.
///
/// Returns `None` for non-finite values or ones chrono cannot represent.
fn token_lifetime(seconds: f64) -> Option<Duration> {
    let millis = (seconds * 1000.0).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    Duration::try_milliseconds(millis as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{ManualClock, SystemClock};

    fn session(credentials: Credentials) -> Session {
        Session::new(
            credentials,
            // Nothing listens here; these tests must not reach the network.
            "http://127.0.0.1:9".to_string(),
            reqwest::Client::new(),
            Arc::new(SystemClock),
            Duration::zero(),
        )
    }

    #[test]
    fn test_access_token_expiry_is_exact() {
        let now = Utc::now();
        let token = AccessToken::new("tok", now + Duration::seconds(10));

        assert!(!token.is_expired_at(now, Duration::zero()));
        assert!(!token.is_expired_at(now + Duration::seconds(10), Duration::zero()));
        assert!(token.is_expired_at(
            now + Duration::seconds(10) + Duration::milliseconds(1),
            Duration::zero()
        ));
        assert!(token.is_expired_at(now + Duration::seconds(5), Duration::seconds(6)));
    }

    #[test]
    fn test_access_token_expiry_with_extreme_buffer() {
        let now = Utc::now();
        let token = AccessToken::new("tok", DateTime::<Utc>::MIN_UTC + Duration::seconds(1));

        assert!(token.is_expired_at(now, Duration::days(365)));
        assert!(!token.is_expired_at(DateTime::<Utc>::MIN_UTC, Duration::days(-1)));
    }

    #[test]
    fn test_token_lifetime_conversion() {
        assert_eq!(token_lifetime(3600.0), Some(Duration::seconds(3600)));
        assert_eq!(token_lifetime(1.5), Some(Duration::milliseconds(1500)));
        assert_eq!(token_lifetime(i64::MAX as f64), None);
        assert_eq!(token_lifetime(f64::NAN), None);
        assert_eq!(token_lifetime(f64::INFINITY), None);
    }

    #[test]
    fn test_authenticating_state_keeps_previous_token() {
        let token = AccessToken::new("tok", Utc::now() + Duration::seconds(60));
        let state = SessionState::Authenticating(Some(token));

        assert_eq!(state.token().map(AccessToken::secret), Some("tok"));
        assert!(!state.is_authenticated());
        assert!(SessionState::Authenticating(None).token().is_none());
    }

    #[tokio::test]
    async fn test_new_session_is_unauthenticated() {
        let session = session(Credentials::new(Environment::Sandbox, "a@b.c", "pw"));

        assert!(session.is_token_expired().await);
        assert!(session.expires_at().await.is_none());
        assert!(matches!(session.state().await, SessionState::Unauthenticated));
    }

    #[tokio::test]
    async fn test_refresh_without_credentials_fails_offline() {
        let session = session(Credentials::new(Environment::Sandbox, "", ""));

        match session.refresh_token().await {
            Err(Error::Authentication(msg)) => assert!(msg.contains("without credentials")),
            other => panic!("Expected authentication error, got {:?}", other),
        }
        assert!(matches!(session.state().await, SessionState::Unauthenticated));
    }

    #[tokio::test]
    async fn test_manual_clock_drives_expiry() {
        let clock = ManualClock::default();
        let session = Session::new(
            Credentials::new(Environment::Sandbox, "a@b.c", "pw"),
            "http://127.0.0.1:9".to_string(),
            reqwest::Client::new(),
            Arc::new(clock.clone()),
            Duration::zero(),
        );
        *session.inner.state.write().await = SessionState::Authenticated(AccessToken::new(
            "tok",
            clock.now() + Duration::seconds(3600),
        ));

        assert!(!session.is_token_expired().await);
        clock.advance(Duration::seconds(3601));
        assert!(session.is_token_expired().await);
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = session(
            Credentials::new(Environment::Sandbox, "a@b.c", "super-secret-password")
                .with_api_key("super-secret-key"),
        );
        let debug_str = format!("{:?}", session);

        assert!(!debug_str.contains("super-secret-password"));
        assert!(!debug_str.contains("super-secret-key"));
        assert!(debug_str.contains("REDACTED"));
    }
}
