use crate::config::constants::{
    DEFAULT_CRITICAL_THRESHOLD, DEFAULT_FILE_IMPROVEMENT_THRESHOLD, DEFAULT_HIGH_THRESHOLD, DEFAULT_INPUT_FILE,
    DEFAULT_MAX_IMPROVEMENT_FILES, DEFAULT_MEDIUM_THRESHOLD, DEFAULT_OUTPUT_FILE, DEFAULT_PRIORITY_LIST,
    DEFAULT_TARGET_THRESHOLD,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_input_path() -> String {
        DEFAULT_INPUT_FILE.to_string()
    }

    pub fn default_output_path() -> String {
        DEFAULT_OUTPUT_FILE.to_string()
    }

    pub fn default_priority_list() -> Vec<String> {
        DEFAULT_PRIORITY_LIST.iter().map(ToString::to_string).collect()
    }

    pub const fn default_critical_threshold() -> f64 {
        DEFAULT_CRITICAL_THRESHOLD
    }

    pub const fn default_high_threshold() -> f64 {
        DEFAULT_HIGH_THRESHOLD
    }

    pub const fn default_medium_threshold() -> f64 {
        DEFAULT_MEDIUM_THRESHOLD
    }

    pub const fn default_target_threshold() -> f64 {
        DEFAULT_TARGET_THRESHOLD
    }

    pub const fn default_file_improvement_threshold() -> f64 {
        DEFAULT_FILE_IMPROVEMENT_THRESHOLD
    }

    pub const fn default_max_improvement_files() -> usize {
        DEFAULT_MAX_IMPROVEMENT_FILES
    }

    // Improvement files are listed for anything that is not yet "low".
    pub const fn default_detail_below_threshold() -> f64 {
        DEFAULT_MEDIUM_THRESHOLD
    }
}
