//! Command execution port and its system-shell implementation.

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::ShellConfig;

/// Captured result of one command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `None` when the process was killed by a signal
    pub code: Option<i32>,
}

/// Runs an operator-typed command line and captures its output.
///
/// Implementations receive the line exactly as typed. An `Err` means the
/// command could not be run at all; a command that runs and fails is an
/// `Ok` with a non-zero `code`.
pub trait CommandRunner {
    fn run(&self, command_line: &str) -> io::Result<CommandOutput>;
}

/// Runs command lines through the platform interpreter (`sh -c` / `cmd /C`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemShell {
    program: String,
    flag: String,
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::from_config(&ShellConfig::default())
    }
}

impl SystemShell {
    pub fn new(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        let (program, flag) = config.interpreter();
        Self::new(program, flag)
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl CommandRunner for SystemShell {
    fn run(&self, command_line: &str) -> io::Result<CommandOutput> {
        // stdin is not shared: the operator's pending input belongs to the menu.
        let output = Command::new(&self.program)
            .arg(&self.flag)
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        debug!(
            program = %self.program,
            code = ?output.status.code(),
            "shell command finished"
        );

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}
