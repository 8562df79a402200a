//! Directory creation and recursive listing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Creates `path` and any missing parents.
///
/// On unix the new directories get `mode` (subject to the umask); elsewhere
/// the mode is ignored. An existing directory is not an error.
pub fn create_dirs(path: impl AsRef<Path>, mode: u32) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }

    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path)?;
    log::debug!("Created directory {}", path.display());
    Ok(())
}

/// Recursive view of a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirListing {
    /// Files directly inside the directory, as full paths.
    pub files: Vec<PathBuf>,
    /// Subdirectories keyed by their name.
    pub dirs: BTreeMap<String, DirListing>,
}

impl DirListing {
    /// Total number of files in this directory and below.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.dirs.values().map(DirListing::file_count).sum::<usize>()
    }

    /// All file paths in this directory and below.
    pub fn all_files(&self) -> Vec<PathBuf> {
        let mut out = self.files.clone();
        for dir in self.dirs.values() {
            out.extend(dir.all_files());
        }
        out
    }
}

/// Lists `dir` recursively.
///
/// Directories that cannot be read produce an empty listing instead of an
/// error. Files are sorted by path.
pub fn list_files(dir: impl AsRef<Path>) -> DirListing {
    let dir = dir.as_ref();
    let mut listing = DirListing::default();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot read directory {}: {}", dir.display(), e);
            return listing;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            listing.dirs.insert(name, list_files(&path));
        } else {
            listing.files.push(path);
        }
    }

    listing.files.sort();
    listing
}
