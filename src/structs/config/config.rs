use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::paths_config::PathsConfig;
use crate::structs::config::threshold_config::ThresholdConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub thresholds: ThresholdConfig,

    #[serde(default = "ConfigHelper::default_priority_list")]
    pub priority_list: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            thresholds: ThresholdConfig::default(),
            priority_list: ConfigHelper::default_priority_list(),
        }
    }
}
