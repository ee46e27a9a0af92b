mod commands;
mod enums;
pub mod hints;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fauxdict")]
#[command(about = "An endless dictionary of words that should exist", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (defaults to $FAUXDICT_PATH, then the system data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Word list URL or path (overrides config)")]
    pub source: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
