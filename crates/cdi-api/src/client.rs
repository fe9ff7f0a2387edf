// CDI API HTTP client
//
// Wraps `reqwest::Client` with CDI-specific URL construction and response
// decoding. Endpoint groups (auth, spaces, area control) are implemented as
// inherent methods in separate files to keep this module focused on
// transport mechanics.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::CallOutcome;
use crate::query::{Query, redacted};
use crate::transport::TransportConfig;

/// Raw HTTP client for the CDI API.
///
/// Stateless apart from the server address: the session key is passed
/// explicitly to every call that needs one.
#[derive(Debug, Clone)]
pub struct CdiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CdiClient {
    /// Create a client for `address` (`host[:port]`, scheme optional).
    pub fn new(address: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let base_url = base_url_from_address(address)?;
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The server root URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/api/{path}?{query}`.
    ///
    /// Any path on the configured address is ignored; the API lives at the
    /// server root.
    pub(crate) fn api_url(&self, path: &str, query: &Query) -> Result<Url, Error> {
        let mut url = self.base_url.join(&format!("/api/{path}"))?;
        query.apply_to(&mut url);
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<CallOutcome<T>, Error> {
        debug!("GET {}", redacted(&url));

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        Self::decode(resp).await
    }

    /// Send a body-less PUT request and decode the response.
    pub(crate) async fn put<T: DeserializeOwned>(&self, url: Url) -> Result<CallOutcome<T>, Error> {
        debug!("PUT {}", redacted(&url));

        let resp = self.http.put(url).send().await.map_err(Error::Transport)?;

        Self::decode(resp).await
    }

    /// The HTTP status is not consulted: the server reports failures
    /// through `callStatus`, and the body is decoded either way.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<CallOutcome<T>, Error> {
        debug!(status = %resp.status(), "response received");
        let body = resp.text().await.map_err(Error::Transport)?;
        CallOutcome::from_body(&body)
    }
}

/// Turn a configured address into the server root URL.
///
/// Bare `host[:port]` gets `http://`; an explicit `http://` or `https://`
/// scheme is kept.
pub fn base_url_from_address(address: &str) -> Result<Url, Error> {
    let trimmed = address.trim().trim_end_matches('/');
    let full = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("http://{trimmed}")
    };
    Ok(Url::parse(&full)?)
}
