use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Outcome of a user-initiated change, worded for display.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Success(String),
    Error(String),
}
impl Notice {
    pub fn added(title: &str) -> Self {
        Self::Success(format!("\"{title}\" added successfully!"))
    }

    pub fn updated(title: &str) -> Self {
        Self::Success(format!("\"{title}\" updated successfully!"))
    }

    pub fn deleted(title: &str) -> Self {
        Self::Success(format!("\"{title}\" deleted successfully!"))
    }

    pub fn save_failed(reason: impl std::fmt::Display) -> Self {
        Self::Error(format!("Failed to save book: {reason}"))
    }

    pub fn delete_failed(title: &str, reason: impl std::fmt::Display) -> Self {
        Self::Error(format!("Failed to delete \"{title}\": {reason}"))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }
}
