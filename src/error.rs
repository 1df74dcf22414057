//! Error types for lenscast.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`SceneError`].
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors that can occur during camera, scene, or annotation operations.
#[derive(Error, Debug)]
pub enum SceneError {
    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },

    /// The camera configuration cannot produce a view transform.
    #[error("degenerate camera: {details}")]
    DegenerateCamera {
        /// Description of the degenerate condition.
        details: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading data from a file.
    #[error("failed to load {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Error saving data to a file.
    #[error("failed to save {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// An annotation file holds coordinate arrays of different lengths.
    #[error("coordinate arrays disagree: {x_len} x-values vs {y_len} y-values")]
    MismatchedArrays {
        /// Number of x-coordinates.
        x_len: usize,
        /// Number of y-coordinates.
        y_len: usize,
    },
}

impl SceneError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        SceneError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Create a degenerate camera error.
    pub fn degenerate_camera(details: impl Into<String>) -> Self {
        SceneError::DegenerateCamera {
            details: details.into(),
        }
    }
}
