//! CLI configuration: thin wrapper around `cdi_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--address, --user, --password).

use secrecy::SecretString;

use cdi_core::{ConnectionConfig, TlsMode};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use cdi_config::{
    Config, Profile, config_path, load_config, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate the selected profile + global flags into a `ConnectionConfig`.
///
/// Flags take priority over profile values. Without a matching profile,
/// `--address` and `--user` (plus a password) must all be given.
pub fn resolve_connection(global: &GlobalOpts, config: &Config) -> Result<ConnectionConfig, CliError> {
    let profile_name = active_profile_name(global, config);

    let Some(profile) = config.profiles.get(&profile_name) else {
        // An explicitly requested profile that doesn't exist is an error,
        // not a silent fallback to flags.
        if global.profile.is_some() {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(config),
            });
        }
        return connection_from_flags(global, &profile_name);
    };

    // 1. Address (flag > profile)
    let address = global
        .address
        .clone()
        .unwrap_or_else(|| profile.address.clone());

    // 2. Password (flag/env > password_env > keyring > plaintext)
    let password = match global.password {
        Some(ref pw) => SecretString::from(pw.clone()),
        None => cdi_config::resolve_password(profile, &profile_name)?,
    };

    // 3. Username (flag > profile)
    let merged = Profile {
        address,
        username: global.user.clone().or_else(|| profile.username.clone()),
        password: None,
        password_env: None,
        insecure: Some(global.insecure || profile.insecure.unwrap_or(false)),
    };

    Ok(cdi_config::profile_to_connection(&merged, &profile_name, password)?)
}

/// Build a connection purely from flags / env vars.
fn connection_from_flags(global: &GlobalOpts, profile_name: &str) -> Result<ConnectionConfig, CliError> {
    let address = global.address.clone().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;

    let (Some(user), Some(password)) = (global.user.clone(), global.password.clone()) else {
        return Err(CliError::NoCredentials {
            profile: profile_name.into(),
        });
    };

    let mut connection = ConnectionConfig::new(address, user, SecretString::from(password));
    if global.insecure {
        connection.tls = TlsMode::DangerAcceptInvalid;
    }
    Ok(connection)
}

pub fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
