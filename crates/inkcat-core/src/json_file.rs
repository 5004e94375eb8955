//! Whole-file JSON output shared by both pipeline stages.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Serializes `value` as 2-space-indented JSON and writes it to `path`.
///
/// Non-ASCII characters are written as-is. The bytes go to a hidden sibling
/// file first and are renamed over `path`, so readers never observe a partial
/// file. Missing parent directories are created.
///
/// # Errors
///
/// Returns any I/O error from creating directories, writing, or renaming, and
/// serialization failures converted into [`io::Error`].
pub fn write_pretty_atomic<T>(path: &Path, value: &T) -> io::Result<()>
where
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec_pretty(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    if let Err(e) = fs::write(&staging, &bytes).and_then(|()| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}
