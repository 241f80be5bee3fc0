use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{HOME_CONFIG_PATH, LOCAL_CONFIG_FILE};
use crate::errors::{TrackerError, TrackerResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Coverage Tracker Configuration

# Display order and next-target precedence. Categories missing from the
# report are skipped.
priority_list = [
    "middleware",
    "routes/api/embeddings",
    "utils",
    "workflows",
    "routes/api/search",
    "routes/api/vectors",
    "routes/api/notion",
    "durable-objects",
    "routes/api/files",
    "services",
    "base",
]

[paths]
# Text coverage report to parse (the table printed by the coverage reporter)
input = "coverage-raw.json"

# Snapshot file, overwritten on every run
output = "coverage-tracker.json"

[thresholds]
# Status tiers: below critical -> critical, below high -> high,
# below medium -> medium, everything else -> low
critical = 25.0
high = 50.0
medium = 75.0

# Categories below this are candidates for the next target
target = 90.0

# Files below this are listed as needing improvement
file_improvement = 50.0
max_improvement_files = 3

# Only categories below this list their weak files
detail_below = 75.0
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn load(explicit: Option<&Path>) -> TrackerResult<Config> {
        if let Some(path) = explicit {
            if path.is_dir() {
                return Err(TrackerError::config_error("config path points to a directory", Some("--config")));
            }
            if !path.exists() {
                return Err(TrackerError::config_file_error(&path.display().to_string(), "file does not exist"));
            }
            return Self::load_from(path);
        }

        for candidate in Self::config_locations() {
            if candidate.exists() {
                return Self::load_from(&candidate);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> TrackerResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| TrackerError::config_file_error(&display, &e.to_string()))?;
        toml::from_str(&content).map_err(|e| TrackerError::config_file_error(&display, e.message()))
    }

    fn config_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            locations.push(home.join(HOME_CONFIG_PATH));
        }
        locations
    }

    pub fn create_sample_config(path: &Path, force: bool) -> TrackerResult<()> {
        let display = path.display().to_string();
        if path.exists() && !force {
            return Err(TrackerError::config_file_error(&display, "file already exists (use --force to overwrite)"));
        }

        fs::write(path, SAMPLE_CONFIG).map_err(|e| TrackerError::config_file_error(&display, &e.to_string()))?;
        println!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let thresholds = &config.thresholds;

        let tiers = [
            ("critical", thresholds.critical),
            ("high", thresholds.high),
            ("medium", thresholds.medium),
            ("target", thresholds.target),
            ("file_improvement", thresholds.file_improvement),
            ("detail_below", thresholds.detail_below),
        ];
        for (name, value) in tiers {
            if !(0.0..=100.0).contains(&value) {
                errors.push(format!("Threshold '{}' must be between 0 and 100, got {}", name, value));
            }
        }

        if thresholds.critical > thresholds.high || thresholds.high > thresholds.medium {
            errors.push(format!(
                "Thresholds must satisfy critical <= high <= medium, got {} / {} / {}",
                thresholds.critical, thresholds.high, thresholds.medium
            ));
        }

        if thresholds.max_improvement_files == 0 {
            errors.push("max_improvement_files must be at least 1".to_string());
        }

        if config.priority_list.is_empty() {
            errors.push("priority_list must name at least one category".to_string());
        }

        let mut names = HashSet::new();
        for name in &config.priority_list {
            if !names.insert(name) {
                errors.push(format!("Duplicate category in priority_list: {}", name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
