//! Air-conditioning command handler.

use cdi_core::Cdi;

use crate::cli::{GlobalOpts, TemperatureArgs};
use crate::error::CliError;

use super::util;

pub async fn handle(
    cdi: &Cdi,
    args: TemperatureArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let space = cdi.find_space(&args.space)?;
    let data = space.set_temperature(args.value).await?;
    util::report_control(
        global,
        space,
        &format!("AC target set to {}", args.value),
        &data,
    );
    Ok(())
}
