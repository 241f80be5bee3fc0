pub mod config_helper;
pub mod format_helper;
