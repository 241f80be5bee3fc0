pub mod coverage_logger;
