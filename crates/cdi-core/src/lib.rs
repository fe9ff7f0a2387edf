//! Space registry and room control on top of `cdi-api`.
//!
//! - **[`Cdi`]**: logs in once, lists the server's spaces and merges each
//!   with the externally supplied [`SpaceConfigMap`]. Construction is all or
//!   nothing.
//!
//! - **[`Space`]**: one room: identity from the server, floor/door/lighting
//!   from local config, and the control calls
//!   ([`set_lights`](Space::set_lights), [`open_door`](Space::open_door),
//!   [`set_temperature`](Space::set_temperature)).
//!
//! - **[`LightSelection`]**: `All`, a named `Preset`, or an `Explicit` set of
//!   light ids.

pub mod config;
pub mod controller;
pub mod error;
pub mod lighting;
pub mod session;
pub mod space;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ConnectionConfig, RoomConfig, SpaceConfigMap, ZoneLayout};
pub use controller::Cdi;
pub use error::CoreError;
pub use lighting::{LightSelection, Lighting};
pub use session::Session;
pub use space::{Space, SpaceInfo};

pub use cdi_api::Error as ApiError;
pub use cdi_api::{LightId, RoomId, SessionKey, TlsMode};
