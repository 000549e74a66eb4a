//! Sample CLI printing localized fake records as JSON lines.
//!
//! This binary delegates to `locale_faker::sample_cli` for parsing and
//! generation, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use locale_faker::sample_cli::{CliError, ParseOutcome, parse_args, run_sample};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays one record per line
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let lines = run_sample(&options)?;
            write_lines(io::stdout().lock(), &lines);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: locale_faker_sample [options]\n",
        "\n",
        "Options:\n",
        "  --config <path>      Sample configuration JSON file\n",
        "  --kind <kind>        person, company, location, file or card (defaults to person)\n",
        "  --count <n>          Number of records, 1 to 1000 (overrides the config)\n",
        "  --seed <seed>        RNG seed value for a reproducible run\n",
        "  -h, --help           Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_lines(mut out: impl Write, lines: &[String]) {
    for line in lines {
        if let Err(err) = writeln!(out, "{line}") {
            drop(err);
            return;
        }
    }
}
