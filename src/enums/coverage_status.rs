use serde::{Deserialize, Serialize};
use crate::structs::config::threshold_config::ThresholdConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Low,
    Medium,
    High,
    Critical,
}

impl CoverageStatus {
    pub fn from_coverage(coverage: f64, thresholds: &ThresholdConfig) -> Self {
        if coverage < thresholds.critical {
            Self::Critical
        } else if coverage < thresholds.high {
            Self::High
        } else if coverage < thresholds.medium {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::High => "🟡",
            Self::Medium => "🟠",
            Self::Low => "🟢",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}
