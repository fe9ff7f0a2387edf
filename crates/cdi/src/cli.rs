//! Clap derive structures for the `cdi` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// cdi -- control building spaces through a CDI server
#[derive(Debug, Parser)]
#[command(
    name = "cdi",
    version,
    about = "Control CDI building spaces from the command line",
    long_about = "Log in to a CDI room-control server, list its spaces, and drive\n\
        lighting zones, doors and air-conditioning setpoints per space.\n\n\
        Floors, door ids and lighting zones come from the [rooms] table of\n\
        the config file; the server only knows room ids and names.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "CDI_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server address, host[:port] (overrides profile)
    #[arg(long, short = 'a', env = "CDI_ADDRESS", global = true)]
    pub address: Option<String>,

    /// Login user name (overrides profile)
    #[arg(long, short = 'u', env = "CDI_USER", global = true)]
    pub user: Option<String>,

    /// Login password
    #[arg(long, env = "CDI_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "CDI_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates (https:// addresses only)
    #[arg(long, short = 'k', env = "CDI_INSECURE", global = true)]
    pub insecure: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List and inspect spaces
    #[command(alias = "sp", alias = "s")]
    Spaces(SpacesArgs),

    /// Set lighting levels in a space
    #[command(alias = "light", alias = "l")]
    Lights(LightsArgs),

    /// Open a space's door
    Door(DoorArgs),

    /// Set a space's air-conditioning target temperature
    #[command(alias = "temp", alias = "t")]
    Temperature(TemperatureArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Spaces ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SpacesArgs {
    #[command(subcommand)]
    pub command: SpacesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SpacesCommand {
    /// List every space the server reports
    #[command(alias = "ls")]
    List,

    /// Show one space in detail
    Show {
        /// Room id or space name
        space: String,
    },
}

// ── Control ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LightsArgs {
    /// Room id or space name
    pub space: String,

    /// Level for the selected lights; all other lights go to 0
    pub level: u8,

    /// Named lighting preset from the space's zone layout
    #[arg(long, conflicts_with = "only")]
    pub preset: Option<String>,

    /// Explicit comma-separated light ids
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub only: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DoorArgs {
    /// Room id or space name
    pub space: String,
}

#[derive(Debug, Args)]
pub struct TemperatureArgs {
    /// Room id or space name
    pub space: String,

    /// Target temperature
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or extend the config file with guided setup
    Init,

    /// Display current configuration (secrets masked)
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
