use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileCoverage {
    pub name: String,
    pub coverage: f64,
}

impl FileCoverage {
    pub fn new(name: &str, coverage: f64) -> Self {
        Self {
            name: name.to_string(),
            coverage,
        }
    }
}
