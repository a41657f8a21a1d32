//! Directory walking and per-extension aggregation for codesize.
//!
//! # Overview
//!
//! `codesize-scan` walks a directory tree depth-first and folds every
//! matching file into a [`SizeReport`] keyed by extension label:
//!
//! - **Extension filter** - count only the requested extensions, or every file
//! - **Exclusions** - files and directories matched by identity on disk, not
//!   by path spelling
//! - **Binary files** - content that is not UTF-8 text is skipped
//! - **Progress logging** via `tracing`
//!
//! # Example
//!
//! ```rust,no_run
//! use codesize_scan::{CountConfig, TreeAggregator};
//!
//! let config = CountConfig::new("/path/to/project")
//!     .with_extensions(["rs", "toml"])
//!     .exclude_relative(["target"]);
//!
//! let aggregator = TreeAggregator::new(config).unwrap();
//! let report = aggregator.aggregate().unwrap();
//!
//! for (label, totals) in &report {
//!     println!("{label}: {} files, {} lines", totals.files, totals.lines);
//! }
//! ```

mod aggregator;
mod identity;
mod listing;
mod matcher;
mod probe;

pub use aggregator::TreeAggregator;
pub use identity::FileIdentity;
pub use listing::{Listing, read_listing};
pub use matcher::PathMatcher;
pub use probe::probe_file;

// Re-export core types for convenience
pub use codesize_core::{
    CountConfig, CountError, ExtensionTotals, NO_EXTENSION, SizeReport, display_label,
    extension_label, slash_path,
};
