//! Core types for codesize.
//!
//! This crate provides the data model shared by the scanner and the CLI:
//! per-extension totals, the report that maps extension labels to them,
//! scan configuration and the error type.

mod config;
mod error;
mod extension;
mod report;
mod totals;

pub use config::{CountConfig, CountConfigBuilder};
pub use error::{CountError, slash_path};
pub use extension::{NO_EXTENSION, display_label, extension_label, normalize_extension};
pub use report::SizeReport;
pub use totals::ExtensionTotals;
