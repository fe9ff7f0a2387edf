//! Door command handler.

use cdi_core::Cdi;

use crate::cli::{DoorArgs, GlobalOpts};
use crate::error::CliError;

use super::util;

pub async fn handle(cdi: &Cdi, args: DoorArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let space = cdi.find_space(&args.space)?;
    match space.open_door().await? {
        Some(data) => util::report_control(global, space, "door opened", &data),
        None => util::report_skipped(global, space, "no remotely controllable door"),
    }
    Ok(())
}
