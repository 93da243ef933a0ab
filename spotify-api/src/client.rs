//! HTTP client for the Spotify Web API.
//!
//! Every request goes through [`SpotifyClient::send`]:
//!
//! 1. Join the relative path onto the base URL (`https://api.spotify.com/v1`)
//! 2. Attach `Authorization: Bearer <token>`
//! 3. Encode query parameters and, if present, a JSON body
//! 4. Map a non-2xx status to [`SpotifyError`]
//!
//! # Error format
//!
//! Failed calls return an envelope:
//!
//! ```json
//! { "error": { "status": 401, "message": "Invalid access token" } }
//! ```
//!
//! which becomes [`SpotifyError::Api`](crate::SpotifyError::Api). Anything
//! else becomes [`SpotifyError::Status`](crate::SpotifyError::Status).
//!
//! Nothing is retried. A failed call is reported to the caller as-is.

use crate::auth::Session;
use crate::error::{self, Result, SpotifyError};
use reqwest::Method;
use reqwest::blocking::{Client, Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";
const USER_AGENT: &str = concat!("spotify-api-rs/", env!("CARGO_PKG_VERSION"));

/// Query string as `(name, value)` pairs; empty means "send none".
pub(crate) type Query = Vec<(&'static str, String)>;

/// Blocking HTTP client for the Spotify Web API.
///
/// Holds a [`reqwest::blocking::Client`] and the bearer token. API methods are
/// implemented in separate modules (`user`, `follow`, `library`) as
/// `impl SpotifyClient` blocks.
///
/// The client is `Send + Sync`; calls from several threads need no extra
/// coordination.
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    token: RwLock<String>,
}

impl SpotifyClient {
    /// Create a new client, taking the token from `SPOTIFY_ACCESS_TOKEN` or
    /// `~/.config/spotify-cli/session.json`.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::NotLoggedIn`] if neither source holds a token.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client with an explicit access token.
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::builder().access_token(token).build()
    }

    /// Start configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Base URL every path is joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer token, e.g. after an external refresh.
    ///
    /// Calls already in flight keep the token they started with.
    pub fn set_access_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token.into();
    }

    fn access_token(&self) -> String {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// GET `path` and decode the JSON response into `T`.
    pub(crate) fn get<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T> {
        let resp = self.send(Method::GET, path, query, None)?;
        decode(&resp.bytes()?)
    }

    /// Send a request whose successful response carries no payload the
    /// caller needs (follow / unfollow answer `200` or `204` with an empty
    /// body).
    pub(crate) fn execute(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<()> {
        self.send(method, path, query, body)?;
        Ok(())
    }

    /// Build an authenticated request.
    ///
    /// `path` is relative to the base URL, e.g. `/me/tracks`.
    fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Request> {
        let url = format!("{}{path}", self.base_url);
        let mut req = self
            .http
            .request(method, &url)
            .bearer_auth(self.access_token());
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        Ok(req.build()?)
    }

    /// Send an authenticated request and check its status.
    fn send(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Response> {
        let req = self.build_request(method, path, query, body)?;
        let method = req.method().clone();
        let url = req.url().clone();
        log::debug!("{method} {url}");

        let resp = self.http.execute(req)?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        // A body cut off mid-read still leaves the status worth reporting.
        let body = resp.bytes().unwrap_or_default();
        let err = error::from_response(status.as_u16(), &body);
        log::warn!("{method} {url} failed: {err}");
        Err(err)
    }
}

/// Decode a 2xx body. Failures are [`SpotifyError::Decode`], never a service
/// error.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Configuration for a [`SpotifyClient`].
///
/// ```no_run
/// use std::time::Duration;
/// use spotify_api::SpotifyClient;
///
/// let client = SpotifyClient::builder()
///     .access_token("BQD...")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    token: Option<String>,
}

impl ClientBuilder {
    /// Override the API root (defaults to [`DEFAULT_BASE_URL`]).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Whole-request timeout. Without it the reqwest default applies.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use this token instead of loading a [`Session`].
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<SpotifyClient> {
        let token = match self.token {
            Some(token) => token,
            None => Session::load()?
                .access_token
                .ok_or(SpotifyError::NotLoggedIn)?,
        };
        if token.is_empty() {
            return Err(SpotifyError::NotLoggedIn);
        }

        let mut http = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_owned();

        Ok(SpotifyClient {
            http: http.build()?,
            base_url,
            token: RwLock::new(token),
        })
    }
}
