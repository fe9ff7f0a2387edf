//! Helpers shared by the control commands.

use cdi_core::Space;

use crate::cli::GlobalOpts;
use crate::output;

/// Print the server's `data` payload in the chosen format, then a short
/// confirmation on stderr.
pub fn report_control(global: &GlobalOpts, space: &Space, action: &str, data: &serde_json::Value) {
    let out = output::render_single(
        &global.output,
        data,
        |d| if d.is_null() { String::new() } else { d.to_string() },
        |d| if d.is_null() { String::new() } else { d.to_string() },
    );
    output::print_output(&out, global.quiet);

    if !global.quiet {
        eprintln!("{}: {action}", space.name());
    }
}

/// The space lacks the capability; nothing was sent.
pub fn report_skipped(global: &GlobalOpts, space: &Space, reason: &str) {
    if !global.quiet {
        eprintln!("{}: {reason}; nothing sent", space.name());
    }
}
