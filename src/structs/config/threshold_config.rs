use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ThresholdConfig {
    /// Below this a category is critical.
    #[serde(default = "ConfigHelper::default_critical_threshold")]
    pub critical: f64,

    #[serde(default = "ConfigHelper::default_high_threshold")]
    pub high: f64,

    #[serde(default = "ConfigHelper::default_medium_threshold")]
    pub medium: f64,

    /// A category below this is still a candidate for the next target.
    #[serde(default = "ConfigHelper::default_target_threshold")]
    pub target: f64,

    #[serde(default = "ConfigHelper::default_file_improvement_threshold")]
    pub file_improvement: f64,

    #[serde(default = "ConfigHelper::default_max_improvement_files")]
    pub max_improvement_files: usize,

    /// Categories at or above this never list improvement files.
    #[serde(default = "ConfigHelper::default_detail_below_threshold")]
    pub detail_below: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            critical: ConfigHelper::default_critical_threshold(),
            high: ConfigHelper::default_high_threshold(),
            medium: ConfigHelper::default_medium_threshold(),
            target: ConfigHelper::default_target_threshold(),
            file_improvement: ConfigHelper::default_file_improvement_threshold(),
            max_improvement_files: ConfigHelper::default_max_improvement_files(),
            detail_below: ConfigHelper::default_detail_below_threshold(),
        }
    }
}
