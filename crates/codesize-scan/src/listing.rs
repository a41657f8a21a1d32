//! Directory listing split into files and sub-directories.

use std::fs;
use std::path::{Path, PathBuf};

use codesize_core::CountError;

/// Direct children of a directory, each group sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Regular files.
    pub files: Vec<PathBuf>,
    /// Sub-directories.
    pub dirs: Vec<PathBuf>,
}

/// List the immediate children of `dir`.
///
/// The entry type is taken from the directory entry itself, so symbolic
/// links are never followed. Anything that is neither a regular file nor a
/// directory is left out.
pub fn read_listing(dir: &Path) -> Result<Listing, CountError> {
    let mut listing = Listing::default();

    for entry in fs::read_dir(dir).map_err(|e| CountError::io(dir, e))? {
        let entry = entry.map_err(|e| CountError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| CountError::io(&path, e))?;

        if file_type.is_dir() {
            listing.dirs.push(path);
        } else if file_type.is_file() {
            listing.files.push(path);
        }
    }

    listing.files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    listing.dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_split_and_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("zeta")).unwrap();
        fs::create_dir(root.join("alpha")).unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("alpha/nested.txt"), "n").unwrap();

        let listing = read_listing(root).unwrap();

        assert_eq!(names(&listing.files), vec!["a.txt", "b.txt"]);
        assert_eq!(names(&listing.dirs), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert_eq!(read_listing(temp.path()).unwrap(), Listing::default());
    }

    #[test]
    fn test_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = read_listing(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, CountError::NotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("real.txt"), "x").unwrap();
        fs::create_dir(root.join("dir")).unwrap();
        std::os::unix::fs::symlink(root.join("real.txt"), root.join("link.txt")).unwrap();
        std::os::unix::fs::symlink(root.join("dir"), root.join("dirlink")).unwrap();
        std::os::unix::fs::symlink(root.join("nowhere"), root.join("broken")).unwrap();

        let listing = read_listing(root).unwrap();

        assert_eq!(names(&listing.files), vec!["real.txt"]);
        assert_eq!(names(&listing.dirs), vec!["dir"]);
    }
}
