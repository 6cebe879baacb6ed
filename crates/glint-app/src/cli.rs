use std::path::PathBuf;

use clap::Parser;

/// glint: a shaded sphere and its reflective companion, through a dot screen.
#[derive(Parser, Debug)]
#[command(name = "glint", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug`, `glint=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
