// ── Session ──
//
// One login, one key, held for as long as the owning `Cdi` lives. Shared
// with every `Space` through an `Arc` so control calls can reach the wire
// client without a back-reference to `Cdi`.

use cdi_api::{CdiClient, SessionKey};
use secrecy::SecretString;
use tracing::info;

use crate::error::CoreError;

/// An authenticated connection to a CDI server.
#[derive(Debug)]
pub struct Session {
    api: CdiClient,
    key: SessionKey,
}

impl Session {
    /// Log in and keep the resulting key.
    ///
    /// The key is never refreshed; a server-side expiry surfaces as
    /// `Request` errors on later calls.
    pub async fn login(
        api: CdiClient,
        username: &str,
        password: &SecretString,
    ) -> Result<Self, CoreError> {
        let key = api.login(username, password).await?;
        info!(server = %api.base_url(), user = username, "logged in");
        Ok(Self { api, key })
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn api(&self) -> &CdiClient {
        &self.api
    }
}
