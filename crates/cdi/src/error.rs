//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use cdi_config::ConfigError;
use cdi_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const REJECTED: i32 = 5;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach CDI server: {reason}")]
    #[diagnostic(
        code(cdi::connection_failed),
        help(
            "Check that the server is running and the address is right.\n\
             Address format: host[:port], e.g. 10.0.0.5:8080"
        )
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Login rejected by the CDI server")]
    #[diagnostic(
        code(cdi::auth_failed),
        help(
            "Server response: {body}\n\
             Verify the user name and password for profile '{profile}'."
        )
    )]
    AuthFailed { profile: String, body: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(cdi::no_credentials),
        help(
            "Configure credentials with: cdi config init\n\
             Or pass --user and set CDI_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── Server ───────────────────────────────────────────────────────
    #[error("CDI server rejected the request")]
    #[diagnostic(code(cdi::request_rejected), help("Server response: {body}"))]
    RequestRejected { body: String },

    #[error("Unexpected response from CDI server: {message}")]
    #[diagnostic(code(cdi::bad_response), help("Raw body: {body}"))]
    BadResponse { message: String, body: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(cdi::not_found),
        help("Run: cdi {list_command} to see what is available")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(cdi::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(cdi::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: cdi config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No server configured")]
    #[diagnostic(
        code(cdi::no_config),
        help(
            "Create a profile with: cdi config init\n\
             Or pass --address/--user. Config file: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(cdi::config))]
    Config(ConfigError),

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } | Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            Self::RequestRejected { .. } => exit_code::REJECTED,
            Self::Validation { .. } | Self::NoConfig { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(api) => api.into(),

            CoreError::PresetNotFound { space, key } => CliError::NotFound {
                resource_type: "lighting preset".into(),
                identifier: key,
                list_command: format!("spaces show \"{space}\""),
            },

            CoreError::SpaceNotFound { identifier } => CliError::NotFound {
                resource_type: "space".into(),
                identifier,
                list_command: "spaces list".into(),
            },
        }
    }
}

impl From<cdi_core::ApiError> for CliError {
    fn from(err: cdi_core::ApiError) -> Self {
        use cdi_core::ApiError;

        match err {
            ApiError::Login { body } => CliError::AuthFailed {
                profile: "current".into(),
                body: body.to_string(),
            },
            ApiError::Request { body } => CliError::RequestRejected {
                body: body.to_string(),
            },
            ApiError::Transport(e) => CliError::ConnectionFailed {
                reason: e.to_string(),
            },
            ApiError::InvalidUrl(e) => CliError::Validation {
                field: "address".into(),
                reason: e.to_string(),
            },
            ApiError::Deserialization { message, body } => {
                CliError::BadResponse { message, body }
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}
