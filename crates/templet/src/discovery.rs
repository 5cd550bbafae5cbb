//! Template file discovery.
//!
//! Directories are walked recursively and sorted by file name at every level.
//! An entry is kept only when it is a regular file AND its extension, including
//! the leading `.`, equals the configured filter. Everything else is skipped
//! without error.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, TempletError};

/// Fail with [`TempletError::Path`] unless `dir` exists and is a directory.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    let metadata = std::fs::metadata(dir).map_err(|e| TempletError::path(dir, e))?;
    if !metadata.is_dir() {
        return Err(TempletError::path(dir, "not a directory"));
    }
    Ok(())
}

/// Collect every regular file under `dir` whose extension equals `ext`.
pub fn files_with_extension(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            TempletError::path(path, e)
        })?;

        if entry.file_type().is_file() && has_extension(entry.path(), ext) {
            found.push(entry.into_path());
        }
    }

    tracing::debug!(?dir, ext, count = found.len(), "Discovered template files");
    Ok(found)
}

/// Final path segment of `dir`, or the path as written when it has none
/// (`.`, `..`, `/`).
pub fn derive_name(dir: &Path) -> String {
    match dir.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None if dir.as_os_str().is_empty() => ".".to_string(),
        None => dir.to_string_lossy().into_owned(),
    }
}

/// Name a discovered file is registered under: its path relative to `root`,
/// always `/`-separated.
pub(crate) fn relative_name(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn has_extension(path: &Path, ext: &str) -> bool {
    match path.extension() {
        Some(found) => ext.strip_prefix('.') == Some(&*found.to_string_lossy()),
        None => ext.is_empty(),
    }
}
