// CDI API area-control endpoints
//
// Lighting, door and air-conditioning commands. All are body-less PUTs
// with every parameter (session key included) in the query string, and
// all answer with the `{callStatus, data}` shape.

use tracing::debug;

use crate::client::CdiClient;
use crate::error::Error;
use crate::ids::{LightId, RoomId};
use crate::models::{OptionalDataPayload, SessionKey};
use crate::query::Query;

/// Target level for one light in a `setLightsLevel` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightLevel {
    pub light: LightId,
    pub level: u8,
}

impl CdiClient {
    /// Set the level of each listed light.
    ///
    /// `PUT /api/areaControl/setLightsLevel?levels=..&lights=..&sessionKey=..`
    ///
    /// The `levels` and `lights` lists are matched by position on the
    /// server, so both are produced from the same pass over `assignments`.
    pub async fn set_lights_level(
        &self,
        session: &SessionKey,
        assignments: &[LightLevel],
    ) -> Result<serde_json::Value, Error> {
        let (levels, lights): (Vec<u8>, Vec<&str>) = assignments
            .iter()
            .map(|a| (a.level, a.light.as_str()))
            .unzip();

        let query = Query::new()
            .repeated("levels", levels)
            .repeated("lights", lights)
            .session(session);
        let url = self.api_url("areaControl/setLightsLevel", &query)?;

        debug!(lights = assignments.len(), "setting light levels");
        self.control(url).await
    }

    /// Open a door.
    ///
    /// `PUT /api/areaControl/openDoor?doorId=..&floor=..&sessionKey=..`
    pub async fn open_door(
        &self,
        session: &SessionKey,
        door_id: &str,
        floor: &str,
    ) -> Result<serde_json::Value, Error> {
        let query = Query::new()
            .param("doorId", door_id)
            .param("floor", floor)
            .session(session);
        let url = self.api_url("areaControl/openDoor", &query)?;

        debug!(door_id, floor, "opening door");
        self.control(url).await
    }

    /// Set a room's air-conditioning target temperature.
    ///
    /// `PUT /api/areaControl/setACTargetTemperature?roomId=..&temperature=..&sessionKey=..`
    pub async fn set_ac_target_temperature(
        &self,
        session: &SessionKey,
        room_id: &RoomId,
        temperature: f64,
    ) -> Result<serde_json::Value, Error> {
        let query = Query::new()
            .param("roomId", room_id)
            .param("temperature", temperature)
            .session(session);
        let url = self.api_url("areaControl/setACTargetTemperature", &query)?;

        debug!(%room_id, temperature, "setting AC target temperature");
        self.control(url).await
    }

    async fn control(&self, url: url::Url) -> Result<serde_json::Value, Error> {
        let payload: OptionalDataPayload = self
            .put(url)
            .await?
            .into_result(|body| Error::Request { body })?;
        Ok(payload.data)
    }
}
