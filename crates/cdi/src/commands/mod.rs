//! Command dispatch: bridges CLI args -> core calls -> output formatting.

pub mod config_cmd;
pub mod door;
pub mod lights;
pub mod spaces;
pub mod temperature;
pub mod util;

use cdi_core::Cdi;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, cdi: &Cdi, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Spaces(args) => spaces::handle(cdi, args, global),
        Command::Lights(args) => lights::handle(cdi, args, global).await,
        Command::Door(args) => door::handle(cdi, args, global).await,
        Command::Temperature(args) => temperature::handle(cdi, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
