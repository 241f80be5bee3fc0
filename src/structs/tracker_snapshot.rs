use serde::{Deserialize, Serialize};
use crate::structs::category_coverage::CategoryMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSnapshot {
    pub last_updated: String,
    pub categories: CategoryMap,
    pub priority_list: Vec<String>,
    pub next_target: Option<String>,
}
