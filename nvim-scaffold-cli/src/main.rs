//! nvim-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;

use nvim_scaffold_cli_lib::{observability, NewCommand};

#[derive(Parser)]
#[command(name = "nvim-scaffold")]
#[command(version)]
#[command(about = "Scaffold a new Neovim plugin", long_about = None)]
#[command(after_help = "Example:\n  nvim-scaffold my-plugin --path ~/projects/")]
struct Cli {
    /// Plugin name (e.g., my-plugin)
    name: String,

    /// Output directory for the plugin
    #[arg(long, value_name = "DIR")]
    path: String,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    observability::init(cli.verbose);
    debug!(name = %cli.name, path = %cli.path, "parsed arguments");

    match NewCommand::new(&cli.name, &cli.path).and_then(|cmd| cmd.execute()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", style("Error:").for_stderr().red().bold());
            ExitCode::FAILURE
        }
    }
}
