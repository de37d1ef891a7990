//! Running external command lines through the system shell.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{BumpError, Result};

/// Something that can run a shell command line and hand back its stdout.
///
/// The hook only talks to git through this seam, so gating and locating can
/// be exercised with a scripted implementation.
pub trait Shell {
    /// Run `command_line` and return its captured standard output.
    ///
    /// Fails with [`BumpError::Command`] when the command exits non-zero.
    fn run(&self, command_line: &str) -> Result<Vec<u8>>;

    /// Like [`Shell::run`], decoded as UTF-8 (lossily).
    fn run_text(&self, command_line: &str) -> Result<String> {
        self.run(command_line)
            .map(|out| String::from_utf8_lossy(&out).into_owned())
    }
}

/// Runs commands with `sh -c` inside an explicit working directory.
#[derive(Debug, Clone)]
pub struct SystemShell {
    workdir: PathBuf,
}

impl SystemShell {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        SystemShell {
            workdir: workdir.into(),
        }
    }
}

impl Shell for SystemShell {
    fn run(&self, command_line: &str) -> Result<Vec<u8>> {
        debug!(command = command_line, workdir = %self.workdir.display(), "running command");
        let output = Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                debug!(command = command_line, error = %e, "failed to spawn shell");
                command_error(command_line)
            })?;

        if !output.status.success() {
            debug!(command = command_line, status = ?output.status.code(), "command failed");
            return Err(command_error(command_line));
        }
        Ok(output.stdout)
    }
}

fn command_error(command_line: &str) -> BumpError {
    BumpError::Command {
        command: command_line.to_string(),
    }
}

/// Quote `value` so `sh` passes it through as a single literal word.
pub(crate) fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
