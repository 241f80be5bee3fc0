pub mod config;
pub mod paths_config;
pub mod threshold_config;
