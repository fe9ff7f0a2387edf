// Transport configuration for building the reqwest::Client.
//
// CDI servers are normally reached over plain `http://`, so there is little
// to configure: a user agent, and how to treat certificates on the rare
// installation fronted by TLS.

use crate::error::Error;

/// Certificate handling for `https://` addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// Use the bundled root store.
    #[default]
    System,
    /// Accept any certificate (self-signed building controllers).
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            user_agent: concat!("cdi-api/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// No timeout is set; requests use the transport defaults.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());

        if self.tls == TlsMode::DangerAcceptInvalid {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().map_err(Error::Transport)
    }

    pub fn with_tls(mut self, tls: TlsMode) -> Self {
        self.tls = tls;
        self
    }
}
