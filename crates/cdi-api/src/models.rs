// CDI API response types
//
// Every endpoint answers with a flat JSON object carrying a `callStatus`
// marker. Successful responses put their payload in `data` (or, for login,
// in `sessionKey`); failures carry whatever the server decided to add and
// are kept verbatim for diagnostics.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::ids::RoomId;

/// The literal `callStatus` value the server uses for success.
pub const SUCCESS_MARKER: &str = "SUCCEED";

// ── Call outcome ─────────────────────────────────────────────────────

/// A decoded CDI response, split on the `callStatus` marker.
///
/// `T` is the endpoint-specific success shape. The failure arm keeps the
/// whole body untouched.
#[derive(Debug)]
pub enum CallOutcome<T> {
    Succeeded(T),
    Failed(serde_json::Value),
}

impl<T: DeserializeOwned> CallOutcome<T> {
    /// Decode a raw response body.
    ///
    /// Non-JSON bodies, and success bodies missing the fields `T` requires,
    /// are `Error::Deserialization`. A body whose `callStatus` is anything
    /// but [`SUCCESS_MARKER`] (including absent) is `Failed`.
    pub fn from_body(body: &str) -> Result<Self, Error> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.to_owned(),
            })?;

        let succeeded = value
            .get("callStatus")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|status| status == SUCCESS_MARKER);

        if !succeeded {
            return Ok(Self::Failed(value));
        }

        serde_json::from_value(value)
            .map(Self::Succeeded)
            .map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.to_owned(),
            })
    }

    /// Collapse into a `Result`, mapping the failure body with `on_failure`.
    pub fn into_result(self, on_failure: fn(serde_json::Value) -> Error) -> Result<T, Error> {
        match self {
            Self::Succeeded(payload) => Ok(payload),
            Self::Failed(body) => Err(on_failure(body)),
        }
    }
}

// ── Payload shapes ───────────────────────────────────────────────────

/// Success shape of `GET /api/user/login`.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    #[serde(rename = "sessionKey")]
    pub session_key: String,
}

/// Success shape of every endpoint that answers with `data`.
#[derive(Debug, Deserialize)]
pub struct DataPayload<T> {
    pub data: T,
}

/// Control endpoints may omit `data`; it then reads as `null`.
#[derive(Debug, Deserialize)]
pub struct OptionalDataPayload {
    #[serde(default)]
    pub data: serde_json::Value,
}

// ── Session key ──────────────────────────────────────────────────────

/// Opaque session token returned by login.
///
/// Attached as `sessionKey` to every control call. `Debug` and `Display`
/// never reveal it.
#[derive(Clone)]
pub struct SessionKey(SecretString);

impl SessionKey {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// The raw token, for building a request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionKey([REDACTED])")
    }
}

impl From<LoginPayload> for SessionKey {
    fn from(payload: LoginPayload) -> Self {
        Self::new(payload.session_key)
    }
}

// ── Space ────────────────────────────────────────────────────────────

/// One record from `GET /api/space/all`.
///
/// Only `roomId`, `name` and `position` are interpreted; `position` is
/// opaque and everything else lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSpace {
    #[serde(rename = "roomId")]
    pub room_id: RoomId,
    pub name: String,
    #[serde(default)]
    pub position: serde_json::Value,
    /// Catch-all for fields this client does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_marker_yields_payload() {
        let body = r#"{"callStatus":"SUCCEED","sessionKey":"abc"}"#;
        let outcome = CallOutcome::<LoginPayload>::from_body(body).unwrap();
        match outcome {
            CallOutcome::Succeeded(p) => assert_eq!(p.session_key, "abc"),
            CallOutcome::Failed(body) => panic!("unexpected failure: {body}"),
        }
    }

    #[test]
    fn missing_status_is_failure_with_body() {
        let body = r#"{"message":"who are you"}"#;
        let outcome = CallOutcome::<LoginPayload>::from_body(body).unwrap();
        match outcome {
            CallOutcome::Failed(v) => assert_eq!(v, json!({"message": "who are you"})),
            CallOutcome::Succeeded(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn non_json_body_is_deserialization_error() {
        let err = CallOutcome::<LoginPayload>::from_body("<html>502</html>").unwrap_err();
        assert!(matches!(err, Error::Deserialization { ref body, .. } if body.contains("502")));
    }

    #[test]
    fn session_key_debug_is_redacted() {
        let key = SessionKey::new("super-secret");
        assert!(!format!("{key:?}").contains("super-secret"));
        assert_eq!(key.expose(), "super-secret");
    }
}
