//! Error types for the AR viewer

use crate::camera::FacingMode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Camera unavailable ({facing}): {reason}")]
    CameraUnavailable { facing: FacingMode, reason: String },

    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ViewerError {
    /// Shorthand for a camera failure on the given facing mode
    pub fn camera(facing: FacingMode, reason: impl Into<String>) -> Self {
        ViewerError::CameraUnavailable {
            facing,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
