use std::path::PathBuf;

use clap::{Parser, Subcommand};
use magnascale::ui::ColorWhen;

/// Magnascale - interactive fleet administration menu
#[derive(Parser, Debug)]
#[command(name = "magnascale")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'magnascale' without arguments to start the interactive menu.")]
pub struct Cli {
    /// Output format for scripts (applies to `tree` and error reports)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./magnascale.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Run,

    /// Print the menu structure without starting a session
    Tree,
}
