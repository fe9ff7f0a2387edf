// cdi-api: Async Rust client for the CDI room-control HTTP API

pub mod area_control;
pub mod auth;
pub mod client;
pub mod error;
pub mod ids;
pub mod models;
pub mod query;
pub mod spaces;
pub mod transport;

pub use area_control::LightLevel;
pub use client::{CdiClient, base_url_from_address};
pub use error::Error;
pub use ids::{LightId, RoomId};
pub use models::{CallOutcome, RawSpace, SUCCESS_MARKER, SessionKey};
pub use query::Query;
pub use transport::{TlsMode, TransportConfig};
