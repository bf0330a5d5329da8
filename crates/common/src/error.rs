//! Error types shared across SmileTrack crates.

use std::path::PathBuf;

/// Top-level error type for SmileTrack operations.
#[derive(Debug, thiserror::Error)]
pub enum SmiletrackError {
    #[error("Leaderboard error: {message}")]
    Leaderboard { message: String },

    #[error("Video source error: {message}")]
    VideoSource { message: String },

    #[error("Scoring error: {message}")]
    Scoring { message: String },

    #[error("Invalid frame rate: {fps}")]
    InvalidFrameRate { fps: f64 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SmiletrackError.
pub type SmiletrackResult<T> = Result<T, SmiletrackError>;

impl SmiletrackError {
    pub fn leaderboard(msg: impl Into<String>) -> Self {
        Self::Leaderboard {
            message: msg.into(),
        }
    }

    pub fn video_source(msg: impl Into<String>) -> Self {
        Self::VideoSource {
            message: msg.into(),
        }
    }

    pub fn scoring(msg: impl Into<String>) -> Self {
        Self::Scoring {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
