//! Public client surface + builder.
//! Endpoint paths and default addresses live in `constants`.

pub(crate) mod constants;

use std::fmt;
use std::time::Duration;

use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use url::Url;

use crate::core::NsError;

/// Immutable Basic-auth credential pair supplied at construction.
///
/// The pair is sent as an `Authorization` header on every request and never
/// appears in URLs or query strings. `Debug` output redacts the password.
#[derive(Clone)]
pub(crate) struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub(crate) fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub(crate) fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authenticated client for the NS webservices.
///
/// All state is read-only after construction, so the client can be cloned
/// cheaply and shared across concurrent calls.
#[derive(Debug, Clone)]
pub struct NsClient {
    http: Client,
    base: Url,
    credentials: Credentials,
}

impl NsClient {
    /// Create a client for the production service address.
    ///
    /// No network I/O happens here; the credential pair is not validated
    /// until the first request.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, NsError> {
        Self::builder(username, password).build()
    }

    /// Create a new builder holding the given credential pair.
    pub fn builder(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> NsClientBuilder {
        NsClientBuilder {
            credentials: Credentials::new(username, password),
            base: None,
            user_agent: None,
            timeout: None,
            connect_timeout: None,
        }
    }

    /* -------- internal getters used by the endpoint modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base(&self) -> &Url {
        &self.base
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/* ----------------------- Builder ----------------------- */

pub struct NsClientBuilder {
    credentials: Credentials,
    base: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NsClientBuilder {
    /// Override the service base address (e.g. a mock server in tests).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<NsClient, NsError> {
        let base = match self.base {
            Some(b) => b,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(NsClient {
            http: httpb.build()?,
            base,
            credentials: self.credentials,
        })
    }
}
