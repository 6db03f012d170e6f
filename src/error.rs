// In: src/error.rs

//! This module defines the single, unified error type for the entire tags
//! leaderboard library. It uses the `thiserror` crate to provide ergonomic,
//! context-aware error handling.
//!
//! It also defines `Notice`, the user-visible rendition of an error that the
//! presentation host shows as a transient message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    // =========================================================================
    // === Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// A standings record is malformed. Aborts classification of the whole batch.
    #[error("Invalid standings entry '{name}': {reason}")]
    InvalidEntry { name: String, reason: String },

    /// A sort, filter, visibility toggle or selection was requested on a column
    /// that is not configured to allow it. State is left unchanged.
    #[error("Unsupported table operation: {0}")]
    UnsupportedOperation(String),

    /// An external collaborator (standings source, course settings API) failed.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The identity or organization context required by an operation is absent.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid course settings: {}", .0.join("; "))]
    InvalidCourseSettings(Vec<String>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, typically while loading config or snapshots.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error originating from the underlying I/O subsystem (e.g., config file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LeaderboardError {
    pub(crate) fn invalid_entry(name: &str, reason: impl Into<String>) -> Self {
        LeaderboardError::InvalidEntry {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// `true` for failures that leave the in-memory view usable and are worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, LeaderboardError::UpstreamUnavailable(_))
    }
}

//==================================================================================
// Notices
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Default,
    Destructive,
}

/// A short, user-facing message describing the outcome of an operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Default,
            title: "Success".to_string(),
            description: description.into(),
        }
    }
}

impl From<&LeaderboardError> for Notice {
    fn from(err: &LeaderboardError) -> Self {
        match err {
            // Unauthorized notices are informational, not destructive.
            LeaderboardError::Unauthorized(msg) => Notice {
                level: NoticeLevel::Default,
                title: "Unauthorized".to_string(),
                description: msg.clone(),
            },
            other => Notice {
                level: NoticeLevel::Destructive,
                title: "Error".to_string(),
                description: other.to_string(),
            },
        }
    }
}
