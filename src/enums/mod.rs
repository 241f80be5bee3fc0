pub mod commands;
pub mod coverage_status;
pub mod priority_mark;
