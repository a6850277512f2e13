use std::io;

pub mod comparator;
pub mod diff;
pub mod fixture;
pub mod runner;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

use comparator::{GoldenComparator, GoldenError, Outcome};
use fixture::ExpectedSource;
use runner::{CommandSpec, ProcessRunner};

/// Runs `command` once and reports the comparison on standard output.
pub fn run(
    runner: &dyn ProcessRunner,
    command: CommandSpec,
    source: &ExpectedSource,
) -> Result<Outcome, GoldenError> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    GoldenComparator::new(runner, command).run(source, &mut stdout)
}
