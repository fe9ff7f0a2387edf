// ── Configuration types ──
//
// `ConnectionConfig` is what `Cdi::connect` needs to reach a server.
// `SpaceConfigMap` is the externally supplied room -> floor/door/zone
// mapping. Neither is loaded here; `cdi-config` handles files and env.

use std::collections::BTreeMap;
use std::fmt;

use cdi_api::ids::opt_string_or_number;
use cdi_api::{LightId, RoomId, TlsMode};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Everything needed to log in to a CDI server.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// `host[:port]`, optionally with an `http://` / `https://` scheme.
    pub address: String,
    pub username: String,
    pub password: SecretString,
    pub tls: TlsMode,
}

impl ConnectionConfig {
    pub fn new(
        address: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            address: address.into(),
            username: username.into(),
            password,
            tls: TlsMode::default(),
        }
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("tls", &self.tls)
            .finish()
    }
}

// ── Space config map ────────────────────────────────────────────────

/// Static mapping from room id to local room configuration.
///
/// Read-only from the core's point of view: a missing room simply means
/// the space has no door, floor or lighting control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceConfigMap {
    rooms: BTreeMap<RoomId, RoomConfig>,
}

impl SpaceConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &RoomId) -> Option<&RoomConfig> {
        self.rooms.get(id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Local configuration for one room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    #[serde(
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub floor: Option<String>,

    #[serde(
        default,
        alias = "doorId",
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub door_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneLayout>,
}

/// Lighting layout of a room.
///
/// `all` fixes the order lights are sent in. Every other key is a named
/// preset listing the lights it turns on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub all: Vec<LightId>,
    #[serde(flatten)]
    pub presets: BTreeMap<String, Vec<LightId>>,
}
