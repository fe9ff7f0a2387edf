// ── Space domain type ──
//
// A server-side room merged with its local configuration. Control
// capabilities (door, lighting) exist only when the config map says so.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use cdi_api::{LightId, RawSpace, RoomId};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SpaceConfigMap;
use crate::error::CoreError;
use crate::lighting::{LightSelection, Lighting};
use crate::session::Session;

/// One controllable room.
#[derive(Debug, Clone)]
pub struct Space {
    id: RoomId,
    name: String,
    /// Opaque positional data from the server, passed through as is.
    position: serde_json::Value,
    extra: serde_json::Map<String, serde_json::Value>,
    floor: Option<String>,
    door: Option<String>,
    lighting: Option<Lighting>,
    session: Arc<Session>,
}

impl Space {
    /// Merge a server record with its config entry, if any.
    ///
    /// Never fails: a room missing from `config` just has no door, floor
    /// or lighting.
    pub fn new(raw: RawSpace, config: &SpaceConfigMap, session: Arc<Session>) -> Self {
        let room = config.get(&raw.room_id);
        Self {
            floor: room.and_then(|r| r.floor.clone()),
            door: room.and_then(|r| r.door_id.clone()),
            lighting: room
                .and_then(|r| r.zone.as_ref())
                .map(Lighting::from_zone),
            id: raw.room_id,
            name: raw.name,
            position: raw.position,
            extra: raw.extra,
            session,
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &serde_json::Value {
        &self.position
    }

    /// Server fields beyond id, name and position.
    pub fn extra(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.extra
    }

    pub fn floor(&self) -> Option<&str> {
        self.floor.as_deref()
    }

    pub fn door(&self) -> Option<&str> {
        self.door.as_deref()
    }

    pub fn lighting(&self) -> Option<&Lighting> {
        self.lighting.as_ref()
    }

    /// The full ordered light set, if the space has lighting control.
    pub fn lights(&self) -> Option<&[LightId]> {
        self.lighting.as_ref().map(Lighting::lights)
    }

    /// Named lighting presets, if the space has lighting control.
    pub fn light_configs(&self) -> Option<&BTreeMap<String, BTreeSet<LightId>>> {
        self.lighting.as_ref().map(Lighting::presets)
    }

    /// Both floor and door id are known.
    pub fn has_door_control(&self) -> bool {
        self.floor.is_some() && self.door.is_some()
    }

    // ── Control ──────────────────────────────────────────────────────

    /// Set `selection` to `level` and every other light in the space to 0.
    ///
    /// Returns `Ok(None)` without contacting the server when the space has
    /// no lighting. An unknown preset name fails with `PresetNotFound`
    /// before any request is made.
    pub async fn set_lights(
        &self,
        level: u8,
        selection: &LightSelection,
    ) -> Result<Option<serde_json::Value>, CoreError> {
        let Some(lighting) = &self.lighting else {
            debug!(space = %self.name, "no lighting control, skipping");
            return Ok(None);
        };

        let assignments =
            lighting
                .levels(level, selection)
                .map_err(|missing| CoreError::PresetNotFound {
                    space: self.name.clone(),
                    key: missing.0,
                })?;

        info!(space = %self.name, ?selection, level, "setting lights");
        let data = self
            .session
            .api()
            .set_lights_level(self.session.key(), &assignments)
            .await?;
        Ok(Some(data))
    }

    /// Open the room's door.
    ///
    /// Returns `Ok(None)` without contacting the server when floor or door
    /// id is unknown.
    pub async fn open_door(&self) -> Result<Option<serde_json::Value>, CoreError> {
        let (Some(door), Some(floor)) = (&self.door, &self.floor) else {
            info!(space = %self.name, "space has no remotely controllable door");
            return Ok(None);
        };

        let data = self
            .session
            .api()
            .open_door(self.session.key(), door, floor)
            .await?;
        Ok(Some(data))
    }

    /// Set the air-conditioning target temperature.
    ///
    /// Always sent: whether the room actually has controllable AC is for
    /// the server to decide.
    pub async fn set_temperature(&self, temperature: f64) -> Result<serde_json::Value, CoreError> {
        let data = self
            .session
            .api()
            .set_ac_target_temperature(self.session.key(), &self.id, temperature)
            .await?;
        Ok(data)
    }

    /// A serializable snapshot for display.
    pub fn info(&self) -> SpaceInfo {
        SpaceInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            position: self.position.clone(),
            extra: self.extra().clone(),
            floor: self.floor.clone(),
            door: self.door.clone(),
            lights: self.lights().map(<[LightId]>::to_vec),
            presets: self
                .light_configs()
                .map(|p| p.keys().cloned().collect())
                .unwrap_or_default(),
        }
    }
}

/// Plain-data view of a [`Space`].
#[derive(Debug, Clone, Serialize)]
pub struct SpaceInfo {
    pub id: RoomId,
    pub name: String,
    pub position: serde_json::Value,
    /// Server fields this client does not interpret.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
    pub floor: Option<String>,
    pub door: Option<String>,
    pub lights: Option<Vec<LightId>>,
    pub presets: Vec<String>,
}
