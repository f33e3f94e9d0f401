//! Selecting processes by working directory

use crate::path::{normalize_current_dir, normalize_path};
use crate::record::ProcessRecord;
use std::path::Path;

/// Matches process records against one directory.
///
/// Only exact equality of the normalized forms counts: a process running in a
/// subdirectory of `dir` is not selected.
#[derive(Debug, Clone)]
pub struct DirectoryMatcher<'a> {
    base: &'a Path,
    normalized: String,
}

impl<'a> DirectoryMatcher<'a> {
    /// Match against `current_dir`, which also anchors relative record paths.
    pub fn new(current_dir: &'a Path) -> Self {
        Self {
            base: current_dir,
            normalized: normalize_current_dir(current_dir),
        }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn matches(&self, record: &ProcessRecord) -> bool {
        let candidate = normalize_path(record.working_directory.as_deref(), self.base);
        !candidate.is_empty() && candidate == self.normalized
    }

    /// Records running from the directory, in their original order.
    pub fn select<'r>(&self, records: &'r [ProcessRecord]) -> Vec<&'r ProcessRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
