//! Edge walking directions
//!
//! Each direction bundles the unit vector along the edge (`frame_move`) and
//! its two perpendiculars: `walk_in` steps into the material, `walk_out`
//! steps back out.

use crate::error::GeometryError;
use crate::point::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit vectors for one edge direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionVectors {
    pub frame_move: Vector2,
    pub walk_in: Vector2,
    pub walk_out: Vector2,
}

const UP: DirectionVectors = DirectionVectors {
    frame_move: Vector2::new(0.0, 1.0),
    walk_in: Vector2::new(1.0, 0.0),
    walk_out: Vector2::new(-1.0, 0.0),
};

const DOWN: DirectionVectors = DirectionVectors {
    frame_move: Vector2::new(0.0, -1.0),
    walk_in: Vector2::new(-1.0, 0.0),
    walk_out: Vector2::new(1.0, 0.0),
};

const LEFT: DirectionVectors = DirectionVectors {
    frame_move: Vector2::new(1.0, 0.0),
    walk_in: Vector2::new(0.0, -1.0),
    walk_out: Vector2::new(0.0, 1.0),
};

const RIGHT: DirectionVectors = DirectionVectors {
    frame_move: Vector2::new(-1.0, 0.0),
    walk_in: Vector2::new(0.0, 1.0),
    walk_out: Vector2::new(0.0, -1.0),
};

/// Named edge direction.
///
/// The names describe the panel side being walked, not the screen heading:
/// `Up` walks towards +y, `Left` walks towards +x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn vectors(self) -> &'static DirectionVectors {
        match self {
            Direction::Up => &UP,
            Direction::Down => &DOWN,
            Direction::Left => &LEFT,
            Direction::Right => &RIGHT,
        }
    }

    pub fn frame_move(self) -> Vector2 {
        self.vectors().frame_move
    }

    pub fn walk_in(self) -> Vector2 {
        self.vectors().walk_in
    }

    pub fn walk_out(self) -> Vector2 {
        self.vectors().walk_out
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Direction {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(GeometryError::UnknownDirection(s.to_string())),
        }
    }
}
