//! Fixture set emission.
//!
//! Writes every per-entity artifact plus the reset script into a target
//! directory. Each file is replaced wholesale, so re-running the
//! generator never leaves stale rows from a previous run.

use cap_std::fs::Dir;

use crate::artifact::{Artifact, write_atomic};
use crate::error::EmitError;
use crate::generator::FixtureSet;
use crate::reset::{RESET_FILE_NAME, reset_script};
use crate::seed_data::SeedData;

/// Writes the complete fixture set and reset script into `dir`.
///
/// Artifacts are written in load order, one INSERT statement per line
/// with a trailing newline, followed by the reset script.
///
/// # Errors
///
/// Returns [`EmitError`] if any file cannot be written.
pub fn write_fixture_set(
    dir: &Dir,
    fixtures: &FixtureSet,
    seed_data: &SeedData,
) -> Result<(), EmitError> {
    for artifact in Artifact::LOAD_ORDER {
        let mut contents = fixtures.statements(artifact).join("\n");
        contents.push('\n');
        write_atomic(dir, artifact.file_name(), &contents)?;
    }

    write_atomic(dir, RESET_FILE_NAME, &reset_script(seed_data))?;

    Ok(())
}
