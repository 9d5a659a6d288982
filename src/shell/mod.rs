//! Shell escape
//!
//! A hidden passthrough reachable from the root menu. Every line the operator
//! types is handed verbatim to the command interpreter: there is no
//! allow-list, no sandbox and no confirmation. It is an unrestricted
//! administrative backdoor and must stay one.

mod runner;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::ui::primitives::text::ColoredText;
use crate::ui::Console;

pub use runner::{CommandOutput, CommandRunner, SystemShell};

/// Prompt shown while the shell escape is active
pub const SHELL_PROMPT: &str = "[bash]$ ";

/// Line (trimmed, any case) that leaves the shell escape
pub const EXIT_COMMAND: &str = "exit";

/// How the shell escape ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// Operator typed `exit`
    Exited,
    /// Input stream closed
    InputClosed,
}

pub fn is_exit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

/// Read-run-print loop over a [`CommandRunner`]
pub struct ShellEscape<'a, C: ?Sized> {
    runner: &'a C,
}

impl<'a, C: CommandRunner + ?Sized> ShellEscape<'a, C> {
    pub fn new(runner: &'a C) -> Self {
        Self { runner }
    }

    /// Run until `exit` or end of input.
    ///
    /// Commands that cannot be started are reported and the loop continues;
    /// only console IO errors are returned.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<ShellExit> {
        info!("entering shell escape");
        console.print(
            &ColoredText::info(
                "Entering Bash command environment. Type 'exit' to return to the main menu.",
            )
            .bold(),
        )?;

        loop {
            let Some(line) = console.read_line(SHELL_PROMPT)? else {
                debug!("input closed inside shell escape");
                return Ok(ShellExit::InputClosed);
            };

            if is_exit_command(&line) {
                console.success("Exiting Bash environment and returning to the main menu.")?;
                info!("leaving shell escape");
                return Ok(ShellExit::Exited);
            }

            debug!(command = %line, "running shell command");
            match self.runner.run(&line) {
                Ok(output) => report(console, &output)?,
                Err(err) => console.error(&format!("Error executing command: {}", err))?,
            }
        }
    }
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    output: &CommandOutput,
) -> io::Result<()> {
    let trim = |s: &str| s.trim_end_matches(|c| c == '\n' || c == '\r').to_string();

    if !output.stdout.is_empty() {
        console.print(&ColoredText::success(trim(&output.stdout)))?;
    }
    if !output.stderr.is_empty() {
        console.print(&ColoredText::error(trim(&output.stderr)))?;
    }
    Ok(())
}
