//! Shared capability-based filesystem helpers for fixture-data tests.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs::Dir;

/// Create a unique temp directory under `target/fixture-data-tests`.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the temp directory.
pub fn unique_temp_dir(prefix: &str) -> io::Result<Utf8PathBuf> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir_name = format!("{prefix}-{process_id}-{counter}");
    let dir = Utf8PathBuf::from("target")
        .join("fixture-data-tests")
        .join(dir_name);
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.create_dir_all(&dir)?;
    Ok(dir)
}

/// Open a directory with a capability-based handle.
///
/// # Errors
///
/// Returns any filesystem errors encountered while opening the directory.
pub fn open_dir(path: &Utf8PathBuf) -> io::Result<Dir> {
    Dir::open_ambient_dir(path, ambient_authority())
}

/// Remove a temp directory created by [`unique_temp_dir`], ignoring failures.
pub fn cleanup_dir(path: &Utf8PathBuf) {
    if let Ok(root) = Dir::open_ambient_dir(".", ambient_authority()) {
        drop(root.remove_dir_all(path));
    }
}
