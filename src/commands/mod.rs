pub mod planning;

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{error, warn};

use crate::error::AppError;

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CommandError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<JsonValue>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Validation { message, details } => {
                CommandError::new("VALIDATION_ERROR", message, details)
            }
            AppError::Config { message } => CommandError::new("CONFIG_ERROR", message, None),
            AppError::AnchorOverlap { first, second } => {
                warn!(target: "app::command", %first, %second, "anchor overlap in command");
                CommandError::new(
                    "ANCHOR_OVERLAP",
                    format!("anchors overlap: {first} and {second}"),
                    Some(serde_json::json!({ "first": first, "second": second })),
                )
            }
            AppError::Serialization(error) => {
                error!(target: "app::command", error = %error, "serialization error in command");
                CommandError::new("UNKNOWN", "serialization failed", None)
            }
            AppError::Yaml(error) => CommandError::new("CONFIG_ERROR", error.to_string(), None),
            AppError::Io(error) => {
                error!(target: "app::command", error = %error, "io error in command");
                CommandError::new("UNKNOWN", format!("io failure: {error}"), None)
            }
            AppError::Other(message) => {
                error!(target: "app::command", %message, "unexpected error in command");
                CommandError::new("UNKNOWN", message, None)
            }
        }
    }
}
