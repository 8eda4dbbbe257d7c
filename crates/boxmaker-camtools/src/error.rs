//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for box parameter validation
//! and layout generation.

use boxmaker_core::GeometryError;
use std::io;
use thiserror::Error;

/// Errors that can occur during box generation.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A path operation rejected its input.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// I/O error while writing a drawing.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Errors related to box parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
