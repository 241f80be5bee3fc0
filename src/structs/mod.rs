pub mod category_coverage;
pub mod cli;
pub mod config;
pub mod coverage_ranking;
pub mod file_coverage;
pub mod ranked_category;
pub mod tracker_snapshot;
