//! CLI support for generating fixture artifacts.
//!
//! This module provides parsing and generation helpers for the fixture
//! generator CLI. The binary delegates to these functions so they can be
//! exercised in tests without spawning a subprocess.

use std::fmt;
use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs::Dir;
use thiserror::Error;

use crate::artifact::Artifact;
use crate::config::FixtureConfig;
use crate::emit::write_fixture_set;
use crate::error::{EmitError, GenerationError, SeedDataError};
use crate::generator::generate_fixtures;
use crate::reset::RESET_FILE_NAME;
use crate::seed_data::SeedData;

/// Parsed options for the fixture generator CLI.
#[derive(Debug, Clone)]
pub struct Options {
    out_dir: Utf8PathBuf,
    seed: Option<u64>,
    seed_data_path: Option<PathBuf>,
}

impl Options {
    /// Returns the output directory supplied for the run.
    ///
    /// # Example
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use fixture_data::gen_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--out".to_string(), "fixtures".to_string()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.out_dir(), Utf8Path::new("fixtures"));
    /// ```
    #[must_use]
    pub fn out_dir(&self) -> &Utf8Path {
        &self.out_dir
    }

    /// Returns the RNG seed override, if one was supplied.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the path to an external seed-data document, if supplied.
    #[must_use]
    pub fn seed_data_path(&self) -> Option<&std::path::Path> {
        self.seed_data_path.as_deref()
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Result of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of SQL files written, reset script included.
    pub file_count: usize,
    /// Total number of generated rows across all artifacts.
    pub row_total: usize,
    /// RNG seed the run used.
    pub seed: u64,
}

/// Parses CLI arguments into a generation plan.
///
/// # Errors
///
/// Returns [`CliError`] when required flags are missing or values cannot
/// be parsed.
///
/// # Example
///
/// ```
/// use fixture_data::gen_cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--out".to_string(),
///     "fixtures".to_string(),
///     "--seed".to_string(),
///     "42".to_string(),
/// ];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut out_dir: Option<Utf8PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut seed_data_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--out" => {
                let value = next_value(&mut args, "--out")?;
                out_dir = Some(Utf8PathBuf::from(value));
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            "--seed-data" => {
                let value = next_value(&mut args, "--seed-data")?;
                seed_data_path = Some(PathBuf::from(value));
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_out_dir = out_dir.ok_or(CliError::MissingOutDir)?;
    Ok(ParseOutcome::Options(Options {
        out_dir: resolved_out_dir,
        seed,
        seed_data_path,
    }))
}

/// Runs the full generation flow for the parsed options.
///
/// Loads the seed-data document (built-in defaults when no path was
/// supplied), generates the fixture set, and writes every artifact plus
/// the reset script into the output directory. The directory is created
/// if it does not exist.
///
/// # Errors
///
/// Returns [`CliError`] when the seed data cannot be loaded, generation
/// fails, or the artifacts cannot be written.
pub fn run(options: &Options) -> Result<Summary, CliError> {
    let seed_data = match options.seed_data_path() {
        Some(path) => SeedData::from_file(path)?,
        None => SeedData::builtin(),
    };

    let config = FixtureConfig {
        seed: options.seed.unwrap_or(crate::config::DEFAULT_SEED),
        ..FixtureConfig::default()
    };

    let fixtures = generate_fixtures(&config, &seed_data)?;

    std::fs::create_dir_all(options.out_dir()).map_err(|err| CliError::OutputDir {
        path: options.out_dir().to_path_buf(),
        message: err.to_string(),
    })?;
    let dir = Dir::open_ambient_dir(options.out_dir(), cap_std::ambient_authority()).map_err(
        |err| CliError::OutputDir {
            path: options.out_dir().to_path_buf(),
            message: err.to_string(),
        },
    )?;

    write_fixture_set(&dir, &fixtures, &seed_data)?;

    Ok(Summary {
        file_count: Artifact::LOAD_ORDER.len() + 1,
        row_total: fixtures.row_total(),
        seed: config.seed,
    })
}

/// Formats the success message emitted by the CLI.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use fixture_data::gen_cli::{Summary, success_message};
///
/// let summary = Summary {
///     file_count: 11,
///     row_total: 794,
///     seed: 2026,
/// };
/// let message = success_message(&summary, Utf8Path::new("fixtures"));
///
/// assert!(message.contains("794 rows"));
/// ```
#[must_use]
pub fn success_message(summary: &Summary, out_dir: &Utf8Path) -> String {
    format!(
        "Wrote {} files ({} rows, seed={}, reset script {}) to {}",
        summary.file_count, summary.row_total, summary.seed, RESET_FILE_NAME, out_dir,
    )
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

/// Errors surfaced by the CLI parsing and generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Output directory was not supplied.
    #[error("missing required flag: --out")]
    MissingOutDir,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The output directory could not be created or opened.
    #[error("cannot open output directory {path}: {message}")]
    OutputDir {
        /// Directory that could not be opened.
        path: Utf8PathBuf,
        /// Error message describing the failure.
        message: String,
    },
    /// The seed-data document could not be loaded.
    #[error("seed data error: {source}")]
    SeedData {
        /// Underlying seed-data error.
        #[from]
        #[source]
        source: SeedDataError,
    },
    /// Fixture generation failed.
    #[error("generation error: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
    /// An artifact could not be written.
    #[error("emit error: {source}")]
    Emit {
        /// Underlying emit error.
        #[from]
        #[source]
        source: EmitError,
    },
}
