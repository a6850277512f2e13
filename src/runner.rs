use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PROGRAM: &str = "./a.out";

#[derive(Debug, Error)]
#[error("cannot launch {}", program.display())]
pub struct LaunchError {
    pub program: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

impl Default for CommandSpec {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

/// Output of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Raw bytes; never decoded here.
    pub stdout: Vec<u8>,
    /// `None` when the child was terminated by a signal.
    pub status: Option<i32>,
}

/// Runs a command to completion and captures its standard output.
pub trait ProcessRunner {
    fn run_and_capture(&self, command: &CommandSpec) -> Result<Captured, LaunchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run_and_capture(&self, command: &CommandSpec) -> Result<Captured, LaunchError> {
        debug!(program = %command.program.display(), "launching");
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| LaunchError {
                program: command.program.clone(),
                source,
            })?;
        debug!(
            bytes = output.stdout.len(),
            status = ?output.status.code(),
            "child finished"
        );
        Ok(Captured {
            stdout: output.stdout,
            status: output.status.code(),
        })
    }
}
