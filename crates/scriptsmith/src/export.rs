//! Writing generated scripts to disk.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::result::ScriptResult;

/// File name used when the destination is a directory
pub const DEFAULT_SCRIPT_NAME: &str = "automation-script.js";

/// Write `script` to `destination`.
///
/// A destination that is an existing directory receives
/// [`DEFAULT_SCRIPT_NAME`]. Missing parent directories are created.
/// Returns the path written.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_script(destination: impl AsRef<Path>, script: &str) -> ScriptResult<PathBuf> {
    let destination = destination.as_ref();
    let path = if destination.is_dir() {
        destination.join(DEFAULT_SCRIPT_NAME)
    } else {
        destination.to_path_buf()
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&path, script)?;
    debug!(path = %path.display(), bytes = script.len(), "script written");
    Ok(path)
}
