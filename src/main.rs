use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use goldcheck::fixture::ExpectedSource;
use goldcheck::runner::{CommandSpec, SystemRunner, DEFAULT_PROGRAM};

/// Exit status for a fixture that cannot be read or a program that cannot be started.
const INFRA_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Expected output; the built-in baseline is used when omitted
    expected: Option<PathBuf>,
    /// Program whose standard output is checked
    #[arg(short, long, default_value = DEFAULT_PROGRAM)]
    program: PathBuf,
    /// Arguments passed to the program
    #[arg(last = true)]
    program_args: Vec<OsString>,
    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = ExpectedSource::from(args.expected);
    let command = CommandSpec {
        program: args.program,
        args: args.program_args,
    };
    match goldcheck::run(&SystemRunner, command, &source) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            let err = anyhow::Error::from(err);
            eprintln!("error: {err:#}");
            ExitCode::from(INFRA_FAILURE)
        }
    }
}
