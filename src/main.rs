//! sitepack CLI - static site build pipeline
//!
//! Usage: sitepack [--serve] [--config <PATH>] [--json]
//!
//! Without flags the output directory is rebuilt once. `--serve` keeps
//! esbuild watching and serving while static files are re-copied on change.

mod cli;
mod commands;
mod ui;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::build::cmd_build(&cli) {
        if cli.json {
            let event = sitepack::BuildEvent::Error {
                message: format!("{err:#}"),
            };
            println!("{}", event.to_json());
        } else {
            eprint!("{}", ui::error::format_error(&err, cli.color));
        }
        std::process::exit(1);
    }
}
