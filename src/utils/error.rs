use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown {kind}: {value}")]
    InvalidArgument { kind: String, value: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn invalid_argument(kind: &str, value: &str) -> Self {
        DemoError::InvalidArgument {
            kind: kind.to_string(),
            value: value.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::InvalidArgument { .. } | DemoError::ParseError { .. } => {
                ErrorCategory::Input
            }
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DemoError::IoError(_) | DemoError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::ParseError { .. } => ErrorSeverity::Medium,
            DemoError::InvalidArgument { .. }
            | DemoError::ConfigError { .. }
            | DemoError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            DemoError::IoError(_) | DemoError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a run that failed with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the input file exists relative to --base-dir".to_string()
            }
            DemoError::IoError(_) => "Check file permissions and free disk space".to_string(),
            DemoError::SerializationError(_) => {
                "Inspect the data being written; it could not be encoded as JSON".to_string()
            }
            DemoError::InvalidArgument { kind, .. } => {
                format!("Use one of the supported values for {}", kind)
            }
            DemoError::ParseError { .. } => {
                "Make sure the input file matches the selected import format".to_string()
            }
            DemoError::ConfigError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            DemoError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
