//! Shared configuration for CDI tools.
//!
//! TOML profiles, the room config map, password resolution (env + keyring +
//! plaintext), and translation to `cdi_core::ConnectionConfig`. The CLI adds
//! flag-aware wrappers on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use cdi_core::{ConnectionConfig, SpaceConfigMap, TlsMode};

/// Keyring service name for stored passwords.
const KEYRING_SERVICE: &str = "cdi";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Named server profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    /// Room id -> floor / door / lighting zone layout.
    #[serde(default, skip_serializing_if = "SpaceConfigMap::is_empty")]
    pub rooms: SpaceConfigMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            profiles: BTreeMap::new(),
            rooms: SpaceConfigMap::new(),
        }
    }
}

/// A named CDI server profile.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Server address, `host[:port]` (e.g., "10.0.0.5:8080").
    pub address: String,

    /// Login user name.
    pub username: Option<String>,

    /// Password (plaintext; prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Accept self-signed certificates on `https://` addresses.
    pub insecure: Option<bool>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `CDI_CONFIG`, else platform conventions.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("CDI_CONFIG") {
        return PathBuf::from(path);
    }

    ProjectDirs::from("com", "cdi", "cdi").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("cdi");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// Layers: built-in defaults, then the TOML file (if present), then
/// `CDI_`-prefixed env vars with `__` as the nesting separator
/// (`CDI_DEFAULTS__OUTPUT=json`).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("CDI_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, keyring::Error> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
}

/// Resolve the login user name for a profile.
pub fn resolve_username(profile: &Profile, profile_name: &str) -> Result<String, ConfigError> {
    profile
        .username
        .clone()
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })
}

/// Resolve a profile's password without CLI flags.
///
/// Order: the profile's `password_env` variable, system keyring,
/// plaintext `password`.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env → env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring_entry(profile_name) {
        if let Ok(pw) = entry.get_password() {
            return Ok(SecretString::from(pw));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a profile's password in the system keyring.
pub fn store_password(profile_name: &str, password: &SecretString) -> Result<(), ConfigError> {
    keyring_entry(profile_name)?.set_password(password.expose_secret())?;
    Ok(())
}

/// Build a `ConnectionConfig` from a profile and an already resolved
/// password.
pub fn profile_to_connection(
    profile: &Profile,
    profile_name: &str,
    password: SecretString,
) -> Result<ConnectionConfig, ConfigError> {
    if profile.address.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "address".into(),
            reason: format!("profile '{profile_name}' has an empty address"),
        });
    }

    let username = resolve_username(profile, profile_name)?;
    let mut connection = ConnectionConfig::new(profile.address.clone(), username, password);
    if profile.insecure.unwrap_or(false) {
        connection.tls = TlsMode::DangerAcceptInvalid;
    }
    Ok(connection)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use cdi_core::RoomId;

    use super::*;

    const SAMPLE: &str = r#"
default_profile = "office"

[profiles.office]
address = "10.0.0.5:8080"
username = "operator"
password = "plain"

[rooms."101"]
floor = 3
door_id = "D-101"

[rooms."101".zone]
all = ["L1", "L2"]
reading = ["L1"]
"#;

    #[test]
    fn loads_profiles_and_rooms_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let cfg = load_config_from(&path).unwrap();

        assert_eq!(cfg.default_profile.as_deref(), Some("office"));
        let office = &cfg.profiles["office"];
        assert_eq!(office.address, "10.0.0.5:8080");
        assert_eq!(office.username.as_deref(), Some("operator"));

        let room = cfg.rooms.get(&RoomId::new("101")).unwrap();
        assert_eq!(room.floor.as_deref(), Some("3"));
        assert_eq!(room.zone.as_ref().unwrap().presets.len(), 1);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert!(cfg.profiles.is_empty());
        assert!(cfg.rooms.is_empty());
    }

    #[test]
    fn save_then_load_keeps_rooms() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.toml");
        std::fs::write(&src, SAMPLE).unwrap();
        let cfg = load_config_from(&src).unwrap();

        let dst = dir.path().join("nested").join("out.toml");
        save_config_to(&cfg, &dst).unwrap();
        let reloaded = load_config_from(&dst).unwrap();

        assert_eq!(reloaded.rooms, cfg.rooms);
    }

    #[test]
    fn plaintext_password_is_last_resort() {
        let profile = Profile {
            address: "cdi:80".into(),
            username: Some("op".into()),
            password: Some("plain".into()),
            password_env: Some("CDI_TEST_UNSET_PASSWORD_VAR".into()),
            insecure: None,
        };
        let pw = resolve_password(&profile, "cdi-config-test-no-keyring").unwrap();
        assert_eq!(pw.expose_secret(), "plain");
    }

    #[test]
    fn connection_requires_username() {
        let profile = Profile {
            address: "cdi:80".into(),
            ..Profile::default()
        };
        let err = profile_to_connection(&profile, "p", SecretString::from("x")).unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials { .. }));
    }

    #[test]
    fn insecure_profile_relaxes_tls() {
        let profile = Profile {
            address: "https://cdi.local".into(),
            username: Some("op".into()),
            insecure: Some(true),
            ..Profile::default()
        };
        let conn = profile_to_connection(&profile, "p", SecretString::from("x")).unwrap();
        assert_eq!(conn.tls, TlsMode::DangerAcceptInvalid);
        assert_eq!(conn.username, "op");
    }
}
