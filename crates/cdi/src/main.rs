mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cdi_core::Cdi;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a server connection
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "cdi", &mut std::io::stdout());
            Ok(())
        }

        // All other commands log in and enumerate spaces first
        cmd => {
            let cdi = connect(&cli.global).await?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &cdi, &cli.global).await
        }
    }
}

/// Load config, resolve the profile, and build the space registry.
///
/// The config file is the only source of room layouts, so a file that
/// fails to parse aborts instead of falling back to defaults.
async fn connect(global: &cli::GlobalOpts) -> Result<Cdi, CliError> {
    let cfg = config::load_config()?;
    let profile_name = config::active_profile_name(global, &cfg);
    let connection = config::resolve_connection(global, &cfg)?;

    Cdi::connect(&connection, &cfg.rooms)
        .await
        .map_err(|e| match CliError::from(e) {
            CliError::AuthFailed { body, .. } => CliError::AuthFailed {
                profile: profile_name,
                body,
            },
            other => other,
        })
}
