//! Helpers for driving the built binary with piped stdin.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Captured result of one binary invocation
pub struct Run {
    pub status_ok: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run `magnascale` in `dir` with a clean environment and `stdin` piped in.
///
/// The user config directory points into `dir`, output is forced to plain
/// ASCII without color, and `extra_env` is applied last.
pub fn magnascale(dir: &Path, args: &[&str], stdin: &str, extra_env: &[(&str, &str)]) -> Run {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_magnascale"));
    cmd.args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("LC_ALL", "C")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("MAGNASCALE_NODES")
        .env_remove("MAGNASCALE_SHELL")
        .env_remove("MAGNASCALE_ROOT_NAME")
        .env_remove("MAGNASCALE_COLOR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in extra_env {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output: Output = child.wait_with_output().unwrap();

    Run {
        status_ok: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Every menu path header in `stdout`, in display order
#[allow(dead_code)]
pub fn visited(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|l| l.split("You are in the menu path: ").nth(1))
        .map(|p| p.trim_end_matches('.').to_string())
        .collect()
}
