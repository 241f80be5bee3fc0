use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::structs::file_coverage::FileCoverage;

/// Categories keyed by name, in the order they appear in the report table.
pub type CategoryMap = IndexMap<String, CategoryCoverage>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub coverage: f64,
    pub files: Vec<FileCoverage>,
}

impl CategoryCoverage {
    pub const fn new(coverage: f64) -> Self {
        Self {
            coverage,
            files: Vec::new(),
        }
    }

    /// Files strictly below `threshold`, in report order, capped at `limit`.
    pub fn files_below(&self, threshold: f64, limit: usize) -> Vec<FileCoverage> {
        self.files
            .iter()
            .filter(|file| file.coverage < threshold)
            .take(limit)
            .cloned()
            .collect()
    }
}
