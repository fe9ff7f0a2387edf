// ── Core error types ──
//
// Server-reported failures pass through untouched from `cdi-api` so the
// caller still sees `Login` vs `Request` and the full body. The only
// errors born here are local lookups.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Anything the wire layer reported: login/request rejection,
    /// transport failure, undecodable body.
    #[error(transparent)]
    Api(#[from] cdi_api::Error),

    /// `LightSelection::Preset` named a preset the space does not define.
    #[error("No lighting preset '{key}' in space '{space}'")]
    PresetNotFound { space: String, key: String },

    #[error("Space not found: {identifier}")]
    SpaceNotFound { identifier: String },
}

impl CoreError {
    /// The decoded server body for login/request rejections.
    pub fn response_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Api(e) => e.response_body(),
            _ => None,
        }
    }

    pub fn is_login_rejected(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_login_rejected())
    }

    pub fn is_request_rejected(&self) -> bool {
        matches!(self, Self::Api(cdi_api::Error::Request { .. }))
    }
}
