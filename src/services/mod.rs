pub mod coverage_parser;
pub mod priority_ranker;
pub mod snapshot_writer;
