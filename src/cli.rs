//! CLI Argument Parsing
//!
//! `sitepack` builds once by default; `--serve` switches to dev mode.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// sitepack - static site build pipeline
#[derive(Parser, Debug)]
#[command(name = "sitepack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Watch sources, rebuild on change and serve the output directory
    #[arg(long)]
    pub serve: bool,

    /// Config file (default: ./sitepack.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for CI (NDJSON events on stdout)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v lists every copied file)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
