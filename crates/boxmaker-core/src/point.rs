//! Absolute positions and relative displacements
//!
//! Equality on both types is exact floating-point comparison. Corner rounding
//! relies on it to find "the corner I mean", so callers must reproduce
//! coordinates bit-for-bit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Absolute 2D coordinate (y grows downwards, as in SVG)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by `(dx, dy)`.
    pub fn add(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Returns this point translated by `v`.
    pub fn translate(self, v: Vector2) -> Point {
        self.add(v.x, v.y)
    }
}

impl Add<Vector2> for Point {
    type Output = Point;

    fn add(self, v: Vector2) -> Point {
        self.translate(v)
    }
}

impl Sub for Point {
    type Output = Vector2;

    fn sub(self, other: Point) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Axis a displacement runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Relative displacement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Axis of a non-zero, axis-aligned displacement.
    ///
    /// Zero and diagonal vectors have no axis.
    pub fn axis(&self) -> Option<Axis> {
        match (self.x == 0.0, self.y == 0.0) {
            (false, true) => Some(Axis::Horizontal),
            (true, false) => Some(Axis::Vertical),
            _ => None,
        }
    }

    /// Unit vector pointing the same way as an axis-aligned displacement.
    pub fn unit_along_axis(&self) -> Option<Vector2> {
        self.axis().map(|axis| match axis {
            Axis::Horizontal => Vector2::new(self.x.signum(), 0.0),
            Axis::Vertical => Vector2::new(0.0, self.y.signum()),
        })
    }

    /// z-component of the 2D cross product.
    ///
    /// Positive means a clockwise turn from `self` to `other` on a y-down canvas.
    pub fn cross(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}
