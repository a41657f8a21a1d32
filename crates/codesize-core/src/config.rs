//! Count configuration types.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::extension::normalize_extension;

/// Configuration for a counting run.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CountConfig {
    /// Root directory to scan.
    pub root: PathBuf,

    /// Extensions to count, without the leading dot. Empty matches every file.
    #[builder(default)]
    #[serde(default)]
    pub extensions: Vec<CompactString>,

    /// Files and directories to skip.
    #[builder(default)]
    #[serde(default)]
    pub excluded: Vec<PathBuf>,

    /// Log every processed or skipped file.
    #[builder(default = "false")]
    #[serde(default)]
    pub log_progress: bool,
}

impl CountConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                Err("Root path cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Root path is required".to_string()),
        }
    }
}

impl CountConfig {
    /// Create a new config builder.
    pub fn builder() -> CountConfigBuilder {
        CountConfigBuilder::default()
    }

    /// Count every file under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: Vec::new(),
            excluded: Vec::new(),
            log_progress: false,
        }
    }

    /// Restrict counting to the given extensions (a leading dot is dropped).
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    /// Exclude paths given relative to the root.
    pub fn exclude_relative<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let root = self.root.clone();
        self.excluded
            .extend(paths.into_iter().map(|p| root.join(p.as_ref())));
        self
    }

    /// Enable or disable progress logging.
    pub fn with_log_progress(mut self, enabled: bool) -> Self {
        self.log_progress = enabled;
        self
    }

    /// True when no extension filter is set.
    pub fn is_wildcard(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Check if a file with this extension label should be counted.
    pub fn matches_extension(&self, label: &str) -> bool {
        self.is_wildcard() || self.extensions.iter().any(|e| e.as_str() == label)
    }
}

impl Default for CountConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
