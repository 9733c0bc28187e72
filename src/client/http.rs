//! HTTP client implementation for the KillB API.

use chrono::Duration;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::api::{AccountsService, QuotationsService, RampsService, SavingsService, UsersService};
use crate::auth::{AccessToken, Credentials, Session, API_KEY_HEADER};
use crate::{Environment, Error, Result};

use super::config::ClientConfig;
use super::request::RequestOptions;

/// The main client for interacting with the KillB API.
///
/// The client owns a [`Session`] and attaches its bearer token (and the
/// API key, when configured) to every call. Tokens are obtained lazily and
/// refreshed whenever the held one has expired. Resource services are
/// reached through accessor methods.
///
/// # Example
///
/// ```no_run
/// use killb::{Credentials, Environment, KillbClient, UserId};
///
/// # async fn example() -> killb::Result<()> {
/// let credentials = Credentials::new(Environment::Sandbox, "ops@example.com", "password");
/// let client = KillbClient::login(credentials).await?;
///
/// let accounts = client.accounts().get_by_user(&UserId::new("usr_1")).await?;
/// println!("{:?}", accounts);
/// # Ok(())
/// # }
/// ```
pub struct KillbClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

impl KillbClient {
    /// Create a client without logging in.
    ///
    /// The first call that needs a token logs in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `config.base_url` is not a
    /// valid absolute URL, the expiry buffer is out of range, or the HTTP
    /// client cannot be built.
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base_url = resolve_base_url(credentials.environment(), config.base_url.as_deref())?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Configuration(format!("Cannot build HTTP client: {}", e)))?;

        let expiry_buffer = Duration::try_seconds(config.expiry_buffer_secs).ok_or_else(|| {
            Error::Configuration(format!(
                "Expiry buffer out of range: {}s",
                config.expiry_buffer_secs
            ))
        })?;

        let session = Session::new(
            credentials,
            base_url,
            http.clone(),
            config.clock.clone(),
            expiry_buffer,
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
            }),
        })
    }

    /// Create a client from a raw environment tag (`SANDBOX` or
    /// `PRODUCTION`) without logging in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for any other tag.
    pub fn from_tag(
        environment: &str,
        email: impl Into<String>,
        password: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self> {
        let mut credentials = Credentials::from_tag(environment, email, password)?;
        if let Some(api_key) = api_key {
            credentials = credentials.with_api_key(api_key);
        }
        Self::new(credentials, ClientConfig::default())
    }

    /// Create a client and log in immediately, surfacing bad credentials
    /// before any other call is made.
    pub async fn login(credentials: Credentials) -> Result<Self> {
        Self::login_with_config(credentials, ClientConfig::default()).await
    }

    /// Create a client with custom configuration and log in immediately.
    pub async fn login_with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let client = Self::new(credentials, config)?;
        client.authenticate().await?;
        Ok(client)
    }

    /// Create a client from `KILLB_*` environment variables and log in.
    ///
    /// See [`Credentials::from_env`].
    pub async fn from_env() -> Result<Self> {
        Self::login(Credentials::from_env()?).await
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the quotations service.
    pub fn quotations(&self) -> QuotationsService {
        QuotationsService::new(self.inner.clone())
    }

    /// Get the ramps service.
    pub fn ramps(&self) -> RampsService {
        RampsService::new(self.inner.clone())
    }

    /// Get the savings service.
    pub fn savings(&self) -> SavingsService {
        SavingsService::new(self.inner.clone())
    }

    /// Perform an authenticated call and return the parsed JSON body.
    ///
    /// `endpoint` is relative to the base URL and may carry its own query
    /// string. An empty success body yields [`Value::Null`].
    ///
    /// # Errors
    ///
    /// - [`Error::Authentication`] if logging in fails or the API answers 401
    /// - [`Error::Api`] for any other non-2xx status or an unparseable body
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value> {
        self.inner.request(method, endpoint, &options).await
    }

    /// Like [`request`](Self::request), decoding the body into `T`.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.inner.request_as(method, endpoint, &options).await
    }

    /// Log in now, replacing any held token.
    pub async fn authenticate(&self) -> Result<()> {
        self.inner.session.authenticate().await
    }

    /// Log in again with the stored credentials.
    pub async fn refresh_token(&self) -> Result<()> {
        self.inner.session.refresh_token().await
    }

    /// Returns `true` if no token is held or the held one has expired.
    pub async fn is_token_expired(&self) -> bool {
        self.inner.session.is_token_expired().await
    }

    /// Get the current environment.
    pub fn environment(&self) -> Environment {
        self.inner.session.environment()
    }

    /// Base URL all calls are made against.
    pub fn base_url(&self) -> &str {
        self.inner.session.base_url()
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }
}

fn resolve_base_url(environment: Environment, override_url: Option<&str>) -> Result<String> {
    let raw = override_url.unwrap_or_else(|| environment.api_base_url());
    let parsed = Url::parse(raw)
        .map_err(|e| Error::Configuration(format!("Invalid base URL {:?}: {}", raw, e)))?;
    if parsed.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "Base URL {:?} cannot carry paths",
            raw
        )));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

impl ClientInner {
    /// Join the base URL and a relative endpoint.
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let url = format!(
            "{}/{}",
            self.session.base_url(),
            endpoint.trim_start_matches('/')
        );
        Ok(Url::parse(&url)?)
    }

    /// Build request headers with authentication.
    pub(crate) fn build_headers(&self, token: &AccessToken) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(api_key) = self.session.credentials().api_key() {
            let mut value = HeaderValue::from_str(api_key.expose_secret())
                .map_err(|_| Error::InvalidInput("Invalid API key format".to_string()))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.secret()))
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        Ok(headers)
    }

    /// Perform a call and return the parsed JSON body.
    pub(crate) async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<Value> {
        self.request_as(method, endpoint, options).await
    }

    /// Perform a call and decode the body into `T`.
    pub(crate) async fn request_as<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<T> {
        let (status, body) = self.execute(method, endpoint, options).await?;
        let text = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(text).map_err(|e| Error::undecodable(status.as_u16(), body.clone(), e))
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request_as(Method::GET, path, &RequestOptions::new()).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let options = RequestOptions::new().with_query(query)?;
        self.request_as(Method::GET, path, &options).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let options = RequestOptions::new().with_body(body)?;
        self.request_as(Method::POST, path, &options).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let options = RequestOptions::new().with_body(body)?;
        self.request_as(Method::PATCH, path, &options).await
    }

    /// Ensure a valid token, send the call, and map failure statuses.
    ///
    /// Returns the status and raw body of a 2xx response.
    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<(StatusCode, String)> {
        let token = self.session.valid_token().await?;
        let mut response = self.send(method.clone(), endpoint, options, &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED && self.config.retry_on_unauthorized {
            warn!(%method, endpoint, "Token rejected; logging in again and replaying once");
            let token = self.session.force_refresh(&token).await?;
            response = self.send(method, endpoint, options, &token).await?;
        }

        self.handle_response(response).await
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        options: &RequestOptions,
        token: &AccessToken,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%method, %url, "Sending request");

        let mut request = self
            .http
            .request(method, url)
            .headers(self.build_headers(token)?);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.json {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// Handle an API response.
    async fn handle_response(&self, response: reqwest::Response) -> Result<(StatusCode, String)> {
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;
        debug!(status = status.as_u16(), %url, "Received response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication(format!(
                "Authentication Failed: {}",
                body
            )));
        }

        if !status.is_success() {
            return Err(Error::from_api_response(status.as_u16(), body));
        }

        Ok((status, body))
    }
}

impl Clone for KillbClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for KillbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KillbClient")
            .field("session", &self.inner.session)
            .field("config", &self.inner.config)
            .finish()
    }
}
