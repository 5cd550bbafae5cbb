use std::path::{Path, PathBuf};

use crate::discovery::{derive_name, files_with_extension};
use crate::error::Result;

/// Layout files discovered for a template in layout mode.
///
/// The layout's name is its directory's final segment. The file
/// `<name><ext>` at the top of that directory is the entry point rendered in
/// place of the content root; it pulls content templates in by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: String,
    dir: PathBuf,
    entry: String,
    files: Vec<PathBuf>,
}

impl Layout {
    pub(crate) fn scan(dir: &Path, ext: &str) -> Result<Self> {
        let name = derive_name(dir);
        let files = files_with_extension(dir, ext)?;
        let entry = format!("{name}{ext}");
        Ok(Self {
            name,
            dir: dir.to_path_buf(),
            entry,
            files,
        })
    }

    /// Derived layout name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Name of the template rendered as the layout's entry point.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Discovered layout files, in discovery order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}
