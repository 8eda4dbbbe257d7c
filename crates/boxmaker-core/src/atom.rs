//! Path atoms: the four drawing primitives a path is made of

use crate::error::{check_radius, Result};
use crate::point::{Point, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single path primitive.
///
/// Rendering follows the SVG path grammar: `M x y`, `m dx dy`, `l dx dy`
/// and `a r r 0 large sweep dx dy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathAtom {
    /// Absolute move; sets the cursor to the point
    MoveTo(Point),
    /// Relative move; no stroke
    MoveBy(Vector2),
    /// Relative straight line
    LineBy(Vector2),
    /// Relative circular arc (rx = ry = radius, no rotation)
    Arc {
        radius: f64,
        end: Vector2,
        large_arc: bool,
        sweep: bool,
    },
}

impl PathAtom {
    pub fn move_to(x: f64, y: f64) -> Self {
        PathAtom::MoveTo(Point::new(x, y))
    }

    pub fn move_by(dx: f64, dy: f64) -> Self {
        PathAtom::MoveBy(Vector2::new(dx, dy))
    }

    pub fn line(dx: f64, dy: f64) -> Self {
        PathAtom::LineBy(Vector2::new(dx, dy))
    }

    /// Creates an arc, rejecting radii for which no circle exists.
    pub fn arc(radius: f64, end: Vector2, large_arc: bool, sweep: bool) -> Result<Self> {
        let radius = check_radius(radius)?;
        Ok(PathAtom::Arc {
            radius,
            end,
            large_arc,
            sweep,
        })
    }

    /// Cursor position after this atom when started at `cursor`.
    ///
    /// Arcs only contribute their endpoint offset.
    pub fn advance(&self, cursor: Point) -> Point {
        match *self {
            PathAtom::MoveTo(p) => p,
            PathAtom::MoveBy(v) | PathAtom::LineBy(v) => cursor.translate(v),
            PathAtom::Arc { end, .. } => cursor.translate(end),
        }
    }

    /// Path-language token for this atom.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Displacement of a relative line, `None` for any other atom.
    pub fn as_line(&self) -> Option<Vector2> {
        match *self {
            PathAtom::LineBy(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, PathAtom::LineBy(_))
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

impl fmt::Display for PathAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathAtom::MoveTo(p) => write!(f, "M {:.6} {:.6}", p.x, p.y),
            PathAtom::MoveBy(v) => write!(f, "m {:.6} {:.6}", v.x, v.y),
            PathAtom::LineBy(v) => write!(f, "l {:.6} {:.6}", v.x, v.y),
            PathAtom::Arc {
                radius,
                end,
                large_arc,
                sweep,
            } => write!(
                f,
                "a {:.6} {:.6} 0 {} {} {:.6} {:.6}",
                radius,
                radius,
                flag(*large_arc),
                flag(*sweep),
                end.x,
                end.y
            ),
        }
    }
}
