//! File count, line count and byte size totals.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Totals for a set of files sharing one extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtensionTotals {
    /// Number of files in the set.
    pub files: u64,
    /// Total number of lines across the set.
    pub lines: u64,
    /// Total size in bytes.
    pub bytes: u64,
}

impl ExtensionTotals {
    /// Create totals from explicit values.
    pub fn new(files: u64, lines: u64, bytes: u64) -> Self {
        Self {
            files,
            lines,
            bytes,
        }
    }

    /// Totals of an empty file set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Totals for exactly one file.
    pub fn single_file(lines: u64, bytes: u64) -> Self {
        Self::new(1, lines, bytes)
    }

    /// Pointwise sum of two totals.
    pub fn combine(self, other: Self) -> Self {
        Self {
            files: self.files + other.files,
            lines: self.lines + other.lines,
            bytes: self.bytes + other.bytes,
        }
    }

    /// Check if no file has been counted.
    pub fn is_empty(&self) -> bool {
        self.files == 0
    }
}

impl Add for ExtensionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl AddAssign for ExtensionTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(rhs);
    }
}

impl Sum for ExtensionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::empty(), Self::combine)
    }
}

impl<'a> Sum<&'a ExtensionTotals> for ExtensionTotals {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
