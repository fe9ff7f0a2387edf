//! Config subcommand handlers.

use dialoguer::{Input, Select};
use secrecy::SecretString;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

const MASK: &str = "****";

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display, masking sensitive fields.
fn format_config_redacted(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }

    for (name, p) in &cfg.profiles {
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "address = \"{}\"", p.address);
        if let Some(ref u) = p.username {
            let _ = writeln!(out, "username = \"{u}\"");
        }
        if p.password.is_some() {
            let _ = writeln!(out, "password = \"{MASK}\"");
        }
        if let Some(ref env) = p.password_env {
            let _ = writeln!(out, "password_env = \"{env}\"");
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
    }

    if !cfg.rooms.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "# {} room(s) configured under [rooms]", cfg.rooms.len());
    }

    out.trim_end().to_owned()
}

/// Structured view of the config with plaintext passwords masked.
fn redacted_value(cfg: &Config) -> serde_json::Value {
    let mut value = serde_json::to_value(cfg).unwrap_or_default();
    if let Some(profiles) = value.get_mut("profiles").and_then(|p| p.as_object_mut()) {
        for profile in profiles.values_mut() {
            if let Some(pw) = profile.get_mut("password").filter(|pw| !pw.is_null()) {
                *pw = MASK.into();
            }
        }
    }
    value
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Store the password in the system keyring or return it for plaintext config.
///
/// Returns `Some(password)` if the user chose plaintext, `None` if stored in keyring.
fn prompt_password_storage(profile_name: &str, password: String) -> Result<Option<String>, CliError> {
    let choices = &[
        "Store in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let selection = Select::new()
        .with_prompt("Where to store the password?")
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    if selection == 0 {
        cdi_config::store_password(profile_name, &SecretString::from(password))?;
        eprintln!("   ✓ Password stored in system keyring");
        Ok(None)
    } else {
        Ok(Some(password))
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("CDI CLI configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let address: String = Input::new()
                .with_prompt("Server address (host[:port])")
                .interact_text()
                .map_err(prompt_err)?;

            let username: String = Input::new()
                .with_prompt("Username")
                .interact_text()
                .map_err(prompt_err)?;

            let password = rpassword::prompt_password("Password: ").map_err(prompt_err)?;
            if username.is_empty() || password.is_empty() {
                return Err(CliError::Validation {
                    field: "credentials".into(),
                    reason: "username and password cannot be empty".into(),
                });
            }
            let password = prompt_password_storage(&profile_name, password)?;

            // Extend rather than replace: keep other profiles and [rooms].
            // A file that fails to load is reported, never overwritten.
            let mut cfg = config::load_config()?;
            cfg.profiles.insert(
                profile_name.clone(),
                Profile {
                    address,
                    username: Some(username),
                    password,
                    ..Profile::default()
                },
            );
            cfg.default_profile = Some(profile_name.clone());
            config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            if cfg.rooms.is_empty() {
                eprintln!("  Add floors, doors and lighting zones under [rooms] to enable control.");
            }
            eprintln!("\n  Test it: cdi spaces list");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = output::render_single(
                &global.output,
                &redacted_value(&cfg),
                |_| format_config_redacted(&cfg),
                |_| "config".into(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: cdi config init");
            } else {
                for name in cfg.profiles.keys() {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;

            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "office".into(),
            Profile {
                address: "10.0.0.5:8080".into(),
                username: Some("admin".into()),
                password: Some("hunter2".into()),
                ..Profile::default()
            },
        );
        cfg
    }

    #[test]
    fn text_view_masks_password() {
        let text = format_config_redacted(&sample());
        assert!(text.contains("[profiles.office]"));
        assert!(text.contains("password = \"****\""));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn structured_view_masks_password() {
        let value = redacted_value(&sample());
        assert_eq!(value["profiles"]["office"]["password"], "****");
        assert_eq!(value["profiles"]["office"]["username"], "admin");
    }

    #[test]
    fn views_list_only_effective_settings() {
        let value = redacted_value(&sample());
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["default_profile", "profiles"]);
        assert!(!format_config_redacted(&sample()).contains("[defaults]"));
    }
}
