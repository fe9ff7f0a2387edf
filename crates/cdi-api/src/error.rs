use thiserror::Error;

/// Top-level error type for the `cdi-api` crate.
///
/// The two server-reported failure kinds (`Login`, `Request`) carry the full
/// decoded response body verbatim so callers can inspect whatever the
/// server chose to say. Everything else is a local or transport failure.
#[derive(Debug, Error)]
pub enum Error {
    // ── Server-reported ─────────────────────────────────────────────
    /// The login call came back with a non-success `callStatus`.
    #[error("Login rejected by CDI server: {body}")]
    Login { body: serde_json::Value },

    /// Any other call came back with a non-success `callStatus`.
    #[error("CDI request failed: {body}")]
    Request { body: serde_json::Value },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// Body was not JSON, or not the shape the endpoint promises.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The decoded server body for `Login` / `Request` failures.
    pub fn response_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Login { body } | Self::Request { body } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if the server refused the credentials.
    pub fn is_login_rejected(&self) -> bool {
        matches!(self, Self::Login { .. })
    }
}
