// CDI API authentication
//
// Credentials travel as query parameters of a GET; the response carries
// the session key that every later control call must echo back.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::CdiClient;
use crate::error::Error;
use crate::models::{LoginPayload, SessionKey};
use crate::query::Query;

impl CdiClient {
    /// Authenticate with username/password and return the session key.
    ///
    /// `GET /api/user/login?userName=..&userPWD=..`
    ///
    /// A non-success `callStatus` is `Error::Login` with the full body.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<SessionKey, Error> {
        let query = Query::new()
            .param("userName", username)
            .param("userPWD", password.expose_secret());
        let url = self.api_url("user/login", &query)?;

        debug!(user = username, "logging in");

        let payload: LoginPayload = self
            .get(url)
            .await?
            .into_result(|body| Error::Login { body })?;

        debug!("login successful");
        Ok(SessionKey::from(payload))
    }
}
