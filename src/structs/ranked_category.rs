use crate::enums::coverage_status::CoverageStatus;
use crate::enums::priority_mark::PriorityMark;
use crate::structs::file_coverage::FileCoverage;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCategory {
    /// Index of the category in the priority list, not among present categories.
    pub position: usize,
    pub name: String,
    pub coverage: f64,
    pub status: CoverageStatus,
    pub mark: PriorityMark,
    pub improvement_files: Vec<FileCoverage>,
}
