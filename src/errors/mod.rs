use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    // Input errors
    #[error("Coverage report not found: {path}\n💡 Run the test suite with a text coverage reporter first")]
    InputNotFound { path: String },

    #[error("Failed to read coverage report '{path}': {reason}")]
    InputReadError { path: String, reason: String },

    #[error("No coverage table found in '{path}' (expected a header line with '% Stmts' and '% Branch')")]
    TableNotFound { path: String },

    // Snapshot errors
    #[error("Failed to write snapshot '{path}': {reason}\n💡 Check file permissions and path")]
    SnapshotWriteError { path: String, reason: String },

    #[error("Failed to read snapshot '{path}': {reason}")]
    SnapshotReadError { path: String, reason: String },

    #[error("Failed to write report output: {reason}")]
    OutputError { reason: String },

    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    // Configuration errors
    #[error("Configuration Error: {message}{}", .field.as_ref().map(|f| format!(" (field: {f})")).unwrap_or_default())]
    ConfigurationError { message: String, field: Option<String> },

    #[error("Configuration file error at '{path}': {reason}\n💡 Check file permissions and syntax")]
    ConfigurationFileError { path: String, reason: String },

    #[error("Configuration is invalid:\n{}", .errors.iter().map(|e| format!("  • {e}")).collect::<Vec<_>>().join("\n"))]
    ValidationError { errors: Vec<String> },
}

impl TrackerError {
    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn input_error(path: &str, error: &std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound { path: path.to_string() }
        } else {
            Self::InputReadError {
                path: path.to_string(),
                reason: error.to_string(),
            }
        }
    }

    pub fn snapshot_write_error(path: &str, reason: &str) -> Self {
        Self::SnapshotWriteError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn snapshot_read_error(path: &str, reason: &str) -> Self {
        Self::SnapshotReadError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn output_error(error: &std::io::Error) -> Self {
        Self::OutputError {
            reason: error.to_string(),
        }
    }

    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }

    pub const fn is_malformed_table(&self) -> bool {
        matches!(self, Self::TableNotFound { .. })
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: error.to_string(),
        }
    }
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
