//! Exclusion matching.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use codesize_core::CountError;

use crate::identity::FileIdentity;

/// Answers whether a path is one of the excluded files or directories.
///
/// Exclusions are resolved to a [`FileIdentity`] once, at construction, so
/// any spelling of an excluded path (relative, with `.` segments, through a
/// symlink) matches.
#[derive(Debug, Default)]
pub struct PathMatcher {
    excluded: IndexSet<FileIdentity>,
}

impl PathMatcher {
    /// Resolve the exclusion set.
    ///
    /// Fails with [`CountError::InvalidPaths`] listing every path that does
    /// not exist.
    pub fn new<I, P>(paths: I) -> Result<Self, CountError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut excluded = IndexSet::new();
        let mut invalid: Vec<PathBuf> = Vec::new();

        for path in paths {
            let path = path.as_ref();
            match FileIdentity::of(path) {
                Ok(identity) => {
                    excluded.insert(identity);
                }
                Err(_) => invalid.push(path.to_path_buf()),
            }
        }

        if !invalid.is_empty() {
            return Err(CountError::InvalidPaths { paths: invalid });
        }

        Ok(Self { excluded })
    }

    /// Check if `path` refers to an excluded entry.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.excluded.is_empty() {
            return false;
        }
        FileIdentity::of(path).is_ok_and(|identity| self.excluded.contains(&identity))
    }

    /// Number of distinct excluded entries.
    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    /// Check if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}
