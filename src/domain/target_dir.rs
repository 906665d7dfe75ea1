use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::base::{Error, Result};

/// A directory location that has passed the syntax checks done before any
/// filesystem access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDir {
    path: PathBuf,
}

impl TargetDir {
    pub fn new<P>(path: P) -> Result<TargetDir>
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        if path.as_os_str().is_empty() || path.to_string_lossy().contains('\0') {
            return Err(Error::InvalidPath(path));
        }
        Ok(TargetDir { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Creates the directory and every missing ancestor.
    ///
    /// Returns `Ok(false)` when the directory was already there.
    pub fn create(&self) -> Result<bool> {
        if self.path.is_dir() {
            tracing::debug!(path = %self.path.display(), "target_dir: already a directory");
            return Ok(false);
        }

        if let Some(entry) = self.blocking_entry() {
            return Err(Error::NotADirectory(entry));
        }

        match fs::create_dir_all(&self.path) {
            Ok(()) => Ok(true),
            // someone may have put a file in the way after the check above
            Err(e) => match self.blocking_entry() {
                Some(entry) => Err(Error::NotADirectory(entry)),
                None => Err(Error::from_create_dir(&self.path, e)),
            },
        }
    }

    /// Finds the nearest existing entry on the ancestor chain, the target
    /// itself included, if that entry is not a directory.
    pub fn blocking_entry(&self) -> Option<PathBuf> {
        // drop trailing `/` and `.` so `blocked/` is looked up as `blocked`
        let normalized: PathBuf = self.path.components().collect();
        for ancestor in normalized.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            if let Ok(meta) = fs::metadata(ancestor) {
                if meta.is_dir() {
                    return None;
                }
                tracing::debug!(
                    entry = %ancestor.display(),
                    "target_dir: found non-directory on the ancestor chain",
                );
                return Some(ancestor.to_owned());
            }
        }
        None
    }
}

impl AsRef<Path> for TargetDir {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}

impl fmt::Display for TargetDir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
