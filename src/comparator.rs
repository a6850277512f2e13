use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::diff::unified_diff;
use crate::fixture::{ExpectedSource, FixtureError};
use crate::runner::{CommandSpec, LaunchError, ProcessRunner};

pub const MATCH_VERDICT: &str = "Everything ok";
pub const MISMATCH_VERDICT: &str = "Something is differnet :{";

#[derive(Debug, Error)]
pub enum GoldenError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error(transparent)]
    Launch(#[from] LaunchError),
    #[error("cannot write report")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    Mismatched { diff: String },
}

impl Outcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched)
    }

    pub fn diff(&self) -> &str {
        match self {
            Outcome::Matched => "",
            Outcome::Mismatched { diff } => diff,
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            Outcome::Matched => MATCH_VERDICT,
            Outcome::Mismatched { .. } => MISMATCH_VERDICT,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Matched => 0,
            Outcome::Mismatched { .. } => 1,
        }
    }
}

/// Runs a program once and checks its standard output against a fixture.
pub struct GoldenComparator<'a> {
    runner: &'a dyn ProcessRunner,
    command: CommandSpec,
}

impl<'a> GoldenComparator<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, command: CommandSpec) -> Self {
        Self { runner, command }
    }

    /// Writes the diff (possibly empty) followed by the verdict line to `out`.
    ///
    /// The fixture is resolved before the program is launched, so an
    /// unreadable fixture never spawns anything.
    pub fn run(
        &self,
        source: &ExpectedSource,
        out: &mut dyn Write,
    ) -> Result<Outcome, GoldenError> {
        let expected = source.resolve()?;
        let captured = self.runner.run_and_capture(&self.command)?;
        debug!(status = ?captured.status, "captured {} bytes", captured.stdout.len());

        // Compared as bytes; decoding is only for the diff.
        let actual = String::from_utf8_lossy(&captured.stdout);
        let diff = unified_diff(&expected, &actual);
        writeln!(out, "{}", diff)?;

        let outcome = if captured.stdout == expected.as_bytes() {
            Outcome::Matched
        } else {
            Outcome::Mismatched { diff }
        };
        writeln!(out, "{}", outcome.verdict())?;
        info!(matched = outcome.is_match(), "{}", outcome.verdict());
        Ok(outcome)
    }
}
