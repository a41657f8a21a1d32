//! File identity for comparing paths by what they point at.

use std::io;
use std::path::{Path, PathBuf};

/// Identifies one entry on disk independently of how its path is spelled.
///
/// On Unix this is the (device, inode) pair reported by `stat`. Elsewhere the
/// canonicalized path stands in for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileIdentity {
    /// Device ID and inode number.
    Inode { device: u64, inode: u64 },
    /// Fully resolved absolute path.
    Canonical(PathBuf),
}

impl FileIdentity {
    /// Resolve the identity of `path`, following symbolic links.
    #[cfg(unix)]
    pub fn of(path: &Path) -> io::Result<Self> {
        use std::os::unix::fs::MetadataExt;

        let metadata = std::fs::metadata(path)?;
        Ok(Self::Inode {
            device: metadata.dev(),
            inode: metadata.ino(),
        })
    }

    /// Resolve the identity of `path`, following symbolic links.
    #[cfg(not(unix))]
    pub fn of(path: &Path) -> io::Result<Self> {
        path.canonicalize().map(Self::Canonical)
    }
}
