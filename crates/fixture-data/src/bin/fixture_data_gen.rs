//! Fixture generator CLI for emitting SQL seed artifacts.
//!
//! This binary delegates to `fixture_data::gen_cli` for parsing and
//! generation logic, keeping the CLI behaviour testable without spawning a
//! process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use fixture_data::gen_cli::{CliError, ParseOutcome, parse_args, run as run_generation, success_message};

fn main() -> ExitCode {
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
            let summary = run_generation(&options)?;
            let message = success_message(&summary, options.out_dir());
            write_success(&message);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: fixture-data-gen --out <dir> [options]\n",
        "\n",
        "Options:\n",
        "  --out <dir>          Directory to write the SQL artifacts into\n",
        "  --seed <seed>        RNG seed value (defaults to 2026)\n",
        "  --seed-data <path>   Path to a seed-data JSON document\n",
        "  -h, --help           Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_success(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
