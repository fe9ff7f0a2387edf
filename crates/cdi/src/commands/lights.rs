//! Lighting command handler.

use cdi_core::{Cdi, LightSelection};

use crate::cli::{GlobalOpts, LightsArgs};
use crate::error::CliError;

use super::util;

/// `--preset` picks a named preset, `--only` an explicit set, neither
/// means every light in the space.
fn selection(args: &LightsArgs) -> LightSelection {
    match (&args.preset, args.only.is_empty()) {
        (Some(name), _) => LightSelection::from(name.as_str()),
        (None, false) => args.only.iter().map(String::as_str).collect(),
        (None, true) => LightSelection::All,
    }
}

pub async fn handle(cdi: &Cdi, args: LightsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let space = cdi.find_space(&args.space)?;
    let selection = selection(&args);

    match space.set_lights(args.level, &selection).await? {
        Some(data) => util::report_control(
            global,
            space,
            &format!("lights set to {}", args.level),
            &data,
        ),
        None => util::report_skipped(global, space, "no lighting zone configured"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};

    fn parse(args: &[&str]) -> LightsArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Lights(a) => a,
            other => panic!("expected lights command, got {other:?}"),
        }
    }

    #[test]
    fn defaults_to_all() {
        let args = parse(&["cdi", "lights", "Board Room", "50"]);
        assert_eq!(selection(&args), LightSelection::All);
    }

    #[test]
    fn preset_flag_selects_preset() {
        let args = parse(&["cdi", "lights", "101", "70", "--preset", "reading"]);
        assert_eq!(selection(&args), LightSelection::Preset("reading".into()));
    }

    #[test]
    fn only_flag_builds_explicit_set() {
        let args = parse(&["cdi", "lights", "101", "30", "--only", "L1,L3"]);
        assert_eq!(selection(&args), ["L1", "L3"].into_iter().collect());
    }
}
