//! Space command handlers.

use std::fmt::Write;

use tabled::Tabled;

use cdi_core::{Cdi, LightId, Space, SpaceInfo};

use crate::cli::{GlobalOpts, SpacesArgs, SpacesCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SpaceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Floor")]
    floor: String,
    #[tabled(rename = "Door")]
    door: String,
    #[tabled(rename = "Lights")]
    lights: String,
    #[tabled(rename = "Presets")]
    presets: String,
}

impl SpaceRow {
    fn new(s: &SpaceInfo, color: bool) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name.clone(),
            floor: output::capability(s.floor.as_deref(), color),
            door: output::capability(s.door.as_deref(), color),
            lights: output::capability(
                s.lights.as_ref().map(|l| l.len().to_string()).as_deref(),
                color,
            ),
            presets: s.presets.join(", "),
        }
    }
}

fn detail(s: &SpaceInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID:        {}", s.id);
    let _ = writeln!(out, "Name:      {}", s.name);
    let _ = writeln!(out, "Position:  {}", s.position);
    let _ = writeln!(out, "Floor:     {}", s.floor.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "Door:      {}", s.door.as_deref().unwrap_or("-"));
    match s.lights {
        Some(ref lights) => {
            let ids: Vec<&str> = lights.iter().map(LightId::as_str).collect();
            let _ = writeln!(out, "Lights:    {}", ids.join(", "));
            let presets = if s.presets.is_empty() {
                "-".to_owned()
            } else {
                s.presets.join(", ")
            };
            let _ = write!(out, "Presets:   {presets}");
        }
        None => {
            let _ = write!(out, "Lights:    -");
        }
    }
    out
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(cdi: &Cdi, args: SpacesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(&global.color);

    match args.command {
        SpacesCommand::List => {
            let infos: Vec<SpaceInfo> = cdi.spaces().iter().map(Space::info).collect();
            let out = output::render_list(
                &global.output,
                &infos,
                |s| SpaceRow::new(s, color),
                |s| s.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SpacesCommand::Show { space } => {
            let info = cdi.find_space(&space)?.info();
            let out = output::render_single(&global.output, &info, detail, |s| s.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
