//! Finger-joint ("frame") generation
//!
//! An edge of `length` is split into a leading margin, a run of tab/notch
//! pairs of `frame_length` each, and a trailing margin of the same size as
//! the leading one. Two mating edges use the same settings, one of them with
//! `inverse` set, so their combs interlock.

use crate::direction::Direction;
use crate::error::{GeometryError, Result};
use crate::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Joint parameters shared by every edge of a box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSettings {
    /// Nominal width of one tab or notch
    pub frame_length: f64,
    /// Minimum straight margin at each end of an edge
    pub frame_edges_min: f64,
    /// Material thickness, the default tab depth
    pub thickness: f64,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            frame_length: 10.0,
            frame_edges_min: 5.0,
            thickness: 4.0,
        }
    }
}

/// Tab arithmetic for one edge length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    /// Complete tab + notch pairs
    pub frame_count: usize,
    /// Length of each end margin
    pub remainder: f64,
}

impl FrameSettings {
    pub fn new(frame_length: f64, frame_edges_min: f64, thickness: f64) -> Result<Self> {
        let settings = Self {
            frame_length,
            frame_edges_min,
            thickness,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.frame_length.is_finite() && self.frame_length > 0.0) {
            return Err(GeometryError::InvalidFrameLength {
                frame_length: self.frame_length,
            });
        }
        if !(self.frame_edges_min.is_finite() && self.frame_edges_min >= 0.0) {
            return Err(GeometryError::InvalidEdgeMargin {
                frame_edges_min: self.frame_edges_min,
            });
        }
        if !(self.thickness.is_finite() && self.thickness > 0.0) {
            return Err(GeometryError::InvalidThickness {
                thickness: self.thickness,
            });
        }
        Ok(())
    }

    /// Number of tab pairs that fit on `length` and the resulting end margins.
    ///
    /// An edge too short for a single pair gets zero pairs and two margins
    /// that together cover the whole length.
    pub fn layout(&self, length: f64) -> FrameLayout {
        let in_out_frames = ((length - self.frame_edges_min * 2.0 - self.frame_length)
            / self.frame_length)
            .floor();
        let frame_count = (in_out_frames / 2.0).floor().max(0.0) as usize;
        let remainder = (length - frame_count as f64 * 2.0 * self.frame_length) / 2.0;

        FrameLayout {
            frame_count,
            remainder,
        }
    }

    /// Comb sub-path for one edge.
    ///
    /// * `length` - edge length to cover
    /// * `direction` - which way the edge is walked
    /// * `inverse` - start with the material stepped in, producing the
    ///   complementary comb
    /// * `depth` - perpendicular step, `None` for the material thickness
    ///
    /// The result is not simplified; callers compose several edges first.
    pub fn box_frames(
        &self,
        length: f64,
        direction: Direction,
        inverse: bool,
        depth: Option<f64>,
    ) -> Result<Path> {
        self.validate()?;
        if !(length.is_finite() && length >= 0.0) {
            return Err(GeometryError::InvalidLength { length });
        }
        let depth = depth.unwrap_or(self.thickness);
        if !(depth.is_finite() && depth > 0.0) {
            return Err(GeometryError::InvalidDepth { depth });
        }

        let FrameLayout {
            frame_count,
            remainder,
        } = self.layout(length);
        if frame_count == 0 {
            debug!(length, "edge too short for finger joints");
        }

        let vectors = direction.vectors();
        let half_frame = vectors.frame_move * (self.frame_length / 2.0);
        let walk_in = vectors.walk_in * depth;
        let walk_out = vectors.walk_out * depth;
        let margin = vectors.frame_move * remainder;
        let (first_step, second_step) = if inverse {
            (walk_out, walk_in)
        } else {
            (walk_in, walk_out)
        };

        let mut path = Path::with_capacity(frame_count * 6 + 4);
        if inverse {
            path.line_by(walk_in);
        }
        path.line_by(margin);

        for _ in 0..frame_count {
            path.line_by(half_frame);
            path.line_by(first_step);
            path.line_by(half_frame);
            path.line_by(half_frame);
            path.line_by(second_step);
            path.line_by(half_frame);
        }

        path.line_by(margin);
        if inverse {
            path.line_by(walk_out);
        }
        Ok(path)
    }
}
