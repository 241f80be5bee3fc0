use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "ConfigHelper::default_input_path")]
    pub input: String,

    #[serde(default = "ConfigHelper::default_output_path")]
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: ConfigHelper::default_input_path(),
            output: ConfigHelper::default_output_path(),
        }
    }
}
