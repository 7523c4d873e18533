use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrandError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse guidelines: {message}")]
    ParseFailure { message: String },

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Guideline store error: {0}")]
    Store(String),
}

impl BrandError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        BrandError::InvalidInput(message.into())
    }

    pub fn parse_failure(message: impl Into<String>) -> Self {
        BrandError::ParseFailure {
            message: message.into(),
        }
    }

    pub fn missing_input(message: impl Into<String>) -> Self {
        BrandError::MissingInput(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            BrandError::InvalidInput(msg) => ErrorPayload::new(
                ErrorCategory::Input,
                msg.to_string(),
                "Upload a non-empty text document containing the brand guidelines.",
            ),
            BrandError::ParseFailure { message } => ErrorPayload::new(
                ErrorCategory::Parse,
                message.to_string(),
                "Re-run with --verbose; check custom font names in the [parser] config section.",
            ),
            BrandError::MissingInput(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("guideline") {
                    ErrorPayload::new(
                        ErrorCategory::Input,
                        msg.to_string(),
                        "Run `brandcheck parse --input <FILE>` first or pass --guidelines <PATH>.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Input,
                        msg.to_string(),
                        "Select at least one element: the selection file must contain an element or a non-empty array.",
                    )
                }
            }
            BrandError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            BrandError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check that the JSON input matches the expected shape; run with --verbose for details.",
            ),
            BrandError::Yaml(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check that the YAML input matches the expected shape.",
            ),
            BrandError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("file not found") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Verify the file exists; use an absolute path or run from the working directory.",
                    )
                } else if lower.contains("unsupported") && lower.contains("extension") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use a supported selection file type (json, yaml, yml).",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags/paths and the config file values.",
                    )
                }
            }
            BrandError::Store(msg) => ErrorPayload::new(
                ErrorCategory::Store,
                msg.to_string(),
                "Re-parse the guidelines to rewrite the store, or point --store at a different file.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrandError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Input,
    Parse,
    Config,
    Store,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
