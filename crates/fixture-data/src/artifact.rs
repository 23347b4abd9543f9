//! Fixture artifact identities and atomic file writes.
//!
//! Each artifact maps one generated entity to one SQL file. Writes go
//! through a temporary file and rename, so a crashed run never leaves a
//! partially written artifact behind.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::EmitError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One per-entity SQL artifact in the emitted fixture set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// Account rows.
    Users,
    /// Study group rows.
    Studies,
    /// Per-user profile rows.
    Profiles,
    /// Study membership rows.
    Memberships,
    /// Bookmark rows.
    Bookmarks,
    /// Comment rows.
    Comments,
    /// Notification rows.
    Notifications,
    /// Notice board rows.
    Notices,
    /// User interest-category link rows.
    InterestCategories,
    /// Comment reaction rows.
    Reactions,
}

impl Artifact {
    /// Every artifact, in parent-before-child load order.
    ///
    /// The reset script sources the files in this order, so each file may
    /// only reference rows inserted by files before it.
    pub const LOAD_ORDER: [Self; 10] = [
        Self::Users,
        Self::Studies,
        Self::Profiles,
        Self::Memberships,
        Self::Bookmarks,
        Self::Comments,
        Self::Notifications,
        Self::Notices,
        Self::InterestCategories,
        Self::Reactions,
    ];

    /// Returns the file name this artifact is written under.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Users => "userdata.sql",
            Self::Studies => "studydata.sql",
            Self::Profiles => "userprofiledata.sql",
            Self::Memberships => "studyuserdata.sql",
            Self::Bookmarks => "bookmarkdata.sql",
            Self::Comments => "commentdata.sql",
            Self::Notifications => "notificationdata.sql",
            Self::Notices => "noticedata.sql",
            Self::InterestCategories => "userinterestcategorydata.sql",
            Self::Reactions => "usermetoocommentdata.sql",
        }
    }
}

/// Writes contents to a file atomically using a temp file and rename.
///
/// The function writes to a hidden temporary file in the same directory,
/// then renames it to the target name. This ensures the target file is
/// never partially written.
///
/// # Errors
///
/// Returns [`EmitError::WriteError`] if the file cannot be written.
pub(crate) fn write_atomic(dir: &Dir, file_name: &str, contents: &str) -> Result<(), EmitError> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{}.tmp.{}.{}.{}",
        file_name,
        std::process::id(),
        suffix,
        counter
    );

    write_to_temp_file(dir, &tmp_name, contents)?;
    rename_temp_to_target(dir, &tmp_name, file_name)?;
    sync_parent_directory(dir);

    Ok(())
}

fn write_to_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> Result<(), EmitError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| EmitError::WriteError {
            path: Utf8Path::new(tmp_name).to_path_buf(),
            message: err.to_string(),
        })?;

    if let Err(err) = file.write_all(contents.as_bytes()) {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(EmitError::WriteError {
            path: Utf8Path::new(tmp_name).to_path_buf(),
            message: err.to_string(),
        });
    }

    if let Err(err) = file.sync_all() {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(EmitError::WriteError {
            path: Utf8Path::new(tmp_name).to_path_buf(),
            message: err.to_string(),
        });
    }

    Ok(())
}

fn rename_temp_to_target(dir: &Dir, tmp_name: &str, target_name: &str) -> Result<(), EmitError> {
    if let Err(err) = rename_temp_to_target_impl(dir, tmp_name, target_name) {
        // Best-effort cleanup of temp file on rename failure.
        if dir.remove_file(tmp_name).is_err() {
            // Ignore cleanup failures.
        }
        return Err(EmitError::WriteError {
            path: Utf8Path::new(target_name).to_path_buf(),
            message: err.to_string(),
        });
    }
    Ok(())
}

#[cfg(windows)]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_parent_directory(parent: &Dir) {
    // Best-effort directory sync; ignore failures.
    if parent.open(".").and_then(|dir| dir.sync_all()).is_err() {
        // Ignore sync failures.
    }
}
