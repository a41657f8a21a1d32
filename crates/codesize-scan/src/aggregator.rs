//! Recursive per-extension aggregation over a directory tree.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use tracing::{debug, info, warn};

use codesize_core::{
    CountConfig, CountError, NO_EXTENSION, SizeReport, extension_label, slash_path,
};

use crate::listing::read_listing;
use crate::matcher::PathMatcher;
use crate::probe::probe_file;

/// Walks a directory tree and totals matching files by extension.
#[derive(Debug)]
pub struct TreeAggregator {
    config: CountConfig,
    matcher: PathMatcher,
}

impl TreeAggregator {
    /// Validate the configuration and prepare a walk.
    ///
    /// The root and every excluded path must exist. All invalid paths are
    /// reported together in [`CountError::InvalidPaths`].
    pub fn new(config: CountConfig) -> Result<Self, CountError> {
        let invalid: Vec<PathBuf> = config
            .excluded
            .iter()
            .chain(std::iter::once(&config.root))
            .filter(|path| !path.exists())
            .cloned()
            .collect();

        if !invalid.is_empty() {
            return Err(CountError::InvalidPaths { paths: invalid });
        }

        let matcher = PathMatcher::new(&config.excluded)?;
        debug!(
            target: "codesize",
            root = %slash_path(&config.root),
            excluded = matcher.len(),
            wildcard = config.is_wildcard(),
            "aggregator ready"
        );

        Ok(Self { config, matcher })
    }

    /// Aggregate the whole tree under the configured root.
    pub fn aggregate(&self) -> Result<SizeReport, CountError> {
        self.aggregate_dir(&self.config.root)
    }

    /// Aggregate the subtree rooted at `dir`.
    pub fn aggregate_dir(&self, dir: &Path) -> Result<SizeReport, CountError> {
        if self.matcher.is_excluded(dir) {
            return Ok(SizeReport::new());
        }
        if !dir.is_dir() {
            return Err(CountError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let listing = read_listing(dir)?;

        let mut report = SizeReport::new();
        for sub_dir in &listing.dirs {
            report = report.merge(self.aggregate_dir(sub_dir)?);
        }

        for file in &listing.files {
            self.aggregate_file(file, &mut report)?;
        }

        Ok(report)
    }

    /// Fold one file into `report` if it passes exclusion and extension filters.
    fn aggregate_file(&self, path: &Path, report: &mut SizeReport) -> Result<(), CountError> {
        if self.matcher.is_excluded(path) {
            return Ok(());
        }

        let label = file_label(path);
        if !self.config.matches_extension(&label) {
            return Ok(());
        }

        match probe_file(path) {
            Ok(totals) => {
                report.record(label, totals);
                if self.config.log_progress {
                    info!(target: "codesize", "{} processed", slash_path(path));
                }
                Ok(())
            }
            Err(err) if err.is_recoverable() => {
                if self.config.log_progress {
                    warn!(
                        target: "codesize",
                        "Skipping {}, which can't be opened in read mode",
                        slash_path(path)
                    );
                }
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

/// Extension label of the file at `path`.
///
/// A suffix holding bytes that are not UTF-8 has no faithful label, so such
/// files go under [`NO_EXTENSION`].
fn file_label(path: &Path) -> CompactString {
    let Some(name) = path.file_name() else {
        return CompactString::const_new(NO_EXTENSION);
    };
    match name.to_str() {
        Some(name) => extension_label(name),
        None => {
            let label = extension_label(&name.to_string_lossy());
            if label.contains(char::REPLACEMENT_CHARACTER) {
                CompactString::const_new(NO_EXTENSION)
            } else {
                label
            }
        }
    }
}
