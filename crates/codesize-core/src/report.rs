//! Per-extension size report.

use std::collections::BTreeMap;
use std::collections::btree_map;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::totals::ExtensionTotals;

/// Totals for every extension encountered during one scan, keyed by label.
///
/// Entries are kept sorted by label. A label only appears once at least one
/// file has been recorded under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeReport {
    entries: BTreeMap<CompactString, ExtensionTotals>,
}

impl SizeReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `totals` into the entry for `label`.
    pub fn record(&mut self, label: impl Into<CompactString>, totals: ExtensionTotals) {
        *self.entries.entry(label.into()).or_default() += totals;
    }

    /// Merge two reports key by key.
    ///
    /// Labels present on both sides are combined, labels present on one side
    /// pass through unchanged.
    pub fn merge(mut self, other: Self) -> Self {
        if self.entries.len() < other.entries.len() {
            return other.merge(self);
        }
        for (label, totals) in other.entries {
            self.record(label, totals);
        }
        self
    }

    /// Get the totals for a label.
    pub fn get(&self, label: &str) -> Option<&ExtensionTotals> {
        self.entries.get(label)
    }

    /// Check whether a label is present.
    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(label, totals)` sorted by label.
    pub fn iter(&self) -> btree_map::Iter<'_, CompactString, ExtensionTotals> {
        self.entries.iter()
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(CompactString::as_str)
    }

    /// Combined totals over every label.
    pub fn total(&self) -> ExtensionTotals {
        self.entries.values().sum()
    }
}

impl<L: Into<CompactString>> FromIterator<(L, ExtensionTotals)> for SizeReport {
    fn from_iter<I: IntoIterator<Item = (L, ExtensionTotals)>>(iter: I) -> Self {
        let mut report = Self::new();
        for (label, totals) in iter {
            report.record(label, totals);
        }
        report
    }
}

impl<'a> IntoIterator for &'a SizeReport {
    type Item = (&'a CompactString, &'a ExtensionTotals);
    type IntoIter = btree_map::Iter<'a, CompactString, ExtensionTotals>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
