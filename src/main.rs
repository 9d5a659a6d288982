//! Magnascale CLI - interactive fleet administration menu
//!
//! Usage: magnascale [COMMAND]
//!
//! Commands:
//!   run   Start the interactive menu (default)
//!   tree  Print the menu structure

mod cli;
mod commands;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use magnascale::config;
use magnascale::ui::error::print_error;
use magnascale::ui::output::print_config_warnings;
use magnascale::ui::UiContext;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Errors before the UI context exists are reported without styling.
    let fallback = UiContext {
        json: cli.json,
        ..UiContext::plain()
    };
    if let Err(e) = run(cli) {
        print_error(&e, &fallback);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let loaded = config::load(cli.config.as_deref(), &cwd)?;
    let ui = UiContext::new(cli.json, cli.color, &loaded.config.output);

    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.display(), "using configuration file");
    }
    print_config_warnings(&loaded.warnings, &ui);

    let result = match cli.command {
        None | Some(Commands::Run) => commands::run::cmd_run(&loaded.config, &ui),
        Some(Commands::Tree) => commands::tree::cmd_tree(&loaded.config, &ui),
    };

    if let Err(e) = result {
        print_error(&e, &ui);
        std::process::exit(1);
    }
    Ok(())
}
