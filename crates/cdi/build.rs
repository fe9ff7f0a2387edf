use std::fs;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

// cli.rs depends only on clap + clap_complete, both build-dependencies.
#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir: PathBuf = std::env::var_os("OUT_DIR")
        .expect("OUT_DIR not set by Cargo")
        .into();
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man output directory");

    write_manpages(&cli::Cli::command(), &man_dir);
}

/// One page per command, named `cdi-<sub>.1` for subcommands.
fn write_manpages(cmd: &clap::Command, dir: &Path) {
    let name = cmd.get_name().to_owned();

    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut page)
        .unwrap_or_else(|e| panic!("failed to render man page for `{name}`: {e}"));

    let path = dir.join(format!("{name}.1"));
    fs::write(&path, page).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        write_manpages(&sub.clone().name(format!("{name}-{}", sub.get_name())), dir);
    }
}
