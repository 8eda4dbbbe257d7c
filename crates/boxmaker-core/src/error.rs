//! Error handling for the path engine
//!
//! The engine degrades silently for geometric edge cases (zero-length lines,
//! unmatched corners, edges too short for any tab). The errors below cover
//! inputs for which no geometry is defined at all.

use thiserror::Error;

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Arc or corner radius is zero, negative or not finite
    #[error("Invalid radius {radius}: must be a positive finite number")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// Tab depth is zero, negative or not finite
    #[error("Invalid tab depth {depth}: must be a positive finite number")]
    InvalidDepth {
        /// The rejected depth.
        depth: f64,
    },

    /// Nominal tab width is zero, negative or not finite
    #[error("Invalid frame length {frame_length}: must be a positive finite number")]
    InvalidFrameLength {
        /// The rejected frame length.
        frame_length: f64,
    },

    /// Minimum end margin is negative or not finite
    #[error("Invalid edge margin {frame_edges_min}: must be zero or positive")]
    InvalidEdgeMargin {
        /// The rejected margin.
        frame_edges_min: f64,
    },

    /// Material thickness is zero, negative or not finite
    #[error("Invalid material thickness {thickness}: must be a positive finite number")]
    InvalidThickness {
        /// The rejected thickness.
        thickness: f64,
    },

    /// Edge length is negative or not finite
    #[error("Invalid edge length {length}")]
    InvalidLength {
        /// The rejected length.
        length: f64,
    },

    /// Unit name could not be parsed
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Length text could not be parsed
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Direction name could not be parsed
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),
}

/// Result type alias for path engine operations
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Returns `radius` if it describes a drawable circle.
pub(crate) fn check_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(GeometryError::InvalidRadius { radius })
    }
}
