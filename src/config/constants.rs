pub const DEFAULT_INPUT_FILE: &str = "coverage-raw.json";
pub const DEFAULT_OUTPUT_FILE: &str = "coverage-tracker.json";
pub const LOCAL_CONFIG_FILE: &str = "coverage-tracker.toml";
pub const HOME_CONFIG_PATH: &str = ".coverage-tracker/config.toml";

pub const STATEMENTS_HEADER_MARKER: &str = "% Stmts";
pub const BRANCH_HEADER_MARKER: &str = "% Branch";
pub const TABLE_END_MARKER: &str = "---";
pub const SUMMARY_ROW_PREFIX: &str = "All files";
pub const TEST_FILES_PREFIX: &str = " Test Files";
pub const COLUMN_SEPARATOR: char = '|';
pub const MIN_ROW_FIELDS: usize = 5;

pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 25.0;
pub const DEFAULT_HIGH_THRESHOLD: f64 = 50.0;
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 75.0;
pub const DEFAULT_TARGET_THRESHOLD: f64 = 90.0;
pub const DEFAULT_FILE_IMPROVEMENT_THRESHOLD: f64 = 50.0;
pub const DEFAULT_MAX_IMPROVEMENT_FILES: usize = 3;

/// Priority positions below these bounds get a star or a bolt.
pub const STAR_POSITIONS: usize = 2;
pub const BOLT_POSITIONS: usize = 4;

pub const REPORT_RULE_WIDTH: usize = 60;

pub const DEFAULT_PRIORITY_LIST: &[&str] = &[
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
];
