// ── Top-level client ──
//
// `Cdi` is built all at once: log in, list spaces, merge each with the
// config map. Any failure along the way means no `Cdi` at all.

use std::collections::HashMap;
use std::sync::Arc;

use cdi_api::{CdiClient, RawSpace, RoomId, SessionKey, TransportConfig};
use tracing::{info, warn};

use crate::config::{ConnectionConfig, SpaceConfigMap};
use crate::error::CoreError;
use crate::session::Session;
use crate::space::Space;

/// A logged-in CDI session and every space the server reported.
///
/// `spaces()` keeps server order; the id and name indexes point into it.
#[derive(Debug)]
pub struct Cdi {
    session: Arc<Session>,
    spaces: Vec<Space>,
    by_id: HashMap<RoomId, usize>,
    by_name: HashMap<String, usize>,
}

impl Cdi {
    /// Log in, enumerate spaces, and build the registry.
    pub async fn connect(
        config: &ConnectionConfig,
        spaces: &SpaceConfigMap,
    ) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_tls(config.tls);
        let api = CdiClient::new(&config.address, &transport)?;
        Self::connect_with(api, config, spaces).await
    }

    /// Same as [`connect`](Self::connect) over a pre-built wire client.
    pub async fn connect_with(
        api: CdiClient,
        config: &ConnectionConfig,
        spaces: &SpaceConfigMap,
    ) -> Result<Self, CoreError> {
        let session = Session::login(api, &config.username, &config.password).await?;
        let records = session.api().list_spaces().await?;
        Ok(Self::from_records(Arc::new(session), records, spaces))
    }

    fn from_records(session: Arc<Session>, records: Vec<RawSpace>, config: &SpaceConfigMap) -> Self {
        let mut cdi = Self {
            session,
            spaces: Vec::with_capacity(records.len()),
            by_id: HashMap::with_capacity(records.len()),
            by_name: HashMap::with_capacity(records.len()),
        };

        for raw in records {
            let space = Space::new(raw, config, Arc::clone(&cdi.session));
            let index = cdi.spaces.len();

            if cdi.by_id.insert(space.id().clone(), index).is_some() {
                warn!(id = %space.id(), "duplicate room id, later space wins");
            }
            if cdi.by_name.insert(space.name().to_owned(), index).is_some() {
                warn!(name = space.name(), "duplicate space name, later space wins");
            }

            info!(
                id = %space.id(),
                name = space.name(),
                door = space.has_door_control(),
                lighting = space.lighting().is_some(),
                "created space"
            );
            cdi.spaces.push(space);
        }

        cdi
    }

    pub fn session_key(&self) -> &SessionKey {
        self.session.key()
    }

    /// All spaces, in the order the server listed them.
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn space_by_id(&self, id: &RoomId) -> Option<&Space> {
        self.by_id.get(id).map(|&i| &self.spaces[i])
    }

    pub fn space_by_name(&self, name: &str) -> Option<&Space> {
        self.by_name.get(name).map(|&i| &self.spaces[i])
    }

    /// Look a space up by room id first, then by name.
    pub fn find_space(&self, needle: &str) -> Result<&Space, CoreError> {
        self.space_by_id(&RoomId::new(needle))
            .or_else(|| self.space_by_name(needle))
            .ok_or_else(|| CoreError::SpaceNotFound {
                identifier: needle.to_owned(),
            })
    }
}
