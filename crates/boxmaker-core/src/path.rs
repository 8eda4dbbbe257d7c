//! Ordered path of atoms
//!
//! A path is built incrementally for one panel edge or a whole outline,
//! composed with other paths, simplified once and rendered. Positions are
//! never stored: they are recomputed by replaying the atoms from the origin.

use crate::atom::PathAtom;
use crate::error::{check_radius, Result};
use crate::point::{Point, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Ordered sequence of path atoms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    atoms: Vec<PathAtom>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            atoms: Vec::with_capacity(capacity),
        }
    }

    /// Appends an atom.
    pub fn push(&mut self, atom: PathAtom) {
        self.atoms.push(atom);
    }

    pub fn move_to(&mut self, point: Point) {
        self.push(PathAtom::MoveTo(point));
    }

    pub fn move_by(&mut self, offset: Vector2) {
        self.push(PathAtom::MoveBy(offset));
    }

    pub fn line_by(&mut self, offset: Vector2) {
        self.push(PathAtom::LineBy(offset));
    }

    /// Appends a circular arc ending at `end` relative to the cursor.
    pub fn arc_by(&mut self, radius: f64, end: Vector2, large_arc: bool, sweep: bool) -> Result<()> {
        let atom = PathAtom::arc(radius, end, large_arc, sweep)?;
        self.push(atom);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[PathAtom] {
        &self.atoms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathAtom> {
        self.atoms.iter()
    }

    /// Cursor position after each atom, replayed from the origin.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.atoms.iter().scan(Point::ORIGIN, |cursor, atom| {
            *cursor = atom.advance(*cursor);
            Some(*cursor)
        })
    }

    /// Cursor position after the last atom (the origin for an empty path).
    pub fn final_position(&self) -> Point {
        self.atoms
            .iter()
            .fold(Point::ORIGIN, |cursor, atom| atom.advance(cursor))
    }

    /// Path-language string, one token group per atom, space separated.
    pub fn to_svg_d(&self) -> String {
        self.to_string()
    }

    /// Merges runs of collinear axis-aligned lines and drops zero-length
    /// lines that follow a pending line. A run that sums to zero after an
    /// earlier line vanishes, which keeps the result stable under a second
    /// pass.
    ///
    /// Moves and arcs are copied unchanged and break any run. Diagonal lines
    /// are kept as they are; they never merge with a neighbour.
    pub fn simplify(&self) -> Path {
        let mut result = Path::with_capacity(self.atoms.len());
        let mut pending: Option<Vector2> = None;

        for atom in &self.atoms {
            let Some(line) = atom.as_line() else {
                if let Some(acc) = pending.take() {
                    result.line_by(acc);
                }
                result.push(*atom);
                continue;
            };

            pending = match pending {
                None => Some(line),
                Some(acc) if line.is_zero() => Some(acc),
                Some(acc) if acc.x == 0.0 && line.x == 0.0 => {
                    Some(result.settle(Vector2::new(acc.x, acc.y + line.y)))
                }
                Some(acc) if acc.y == 0.0 && line.y == 0.0 => {
                    Some(result.settle(Vector2::new(acc.x + line.x, acc.y)))
                }
                Some(acc) => {
                    result.line_by(acc);
                    Some(line)
                }
            };
        }

        if let Some(acc) = pending {
            result.line_by(acc);
        }

        trace!(before = self.len(), after = result.len(), "simplified path");
        result
    }

    /// Pending run after a merge. A run that cancels out takes back the line
    /// flushed just before it, so that line can keep merging.
    fn settle(&mut self, pending: Vector2) -> Vector2 {
        if pending.is_zero() {
            if let Some(PathAtom::LineBy(previous)) = self.atoms.last().copied() {
                self.atoms.pop();
                return previous;
            }
        }
        pending
    }

    /// Replaces the right-angle corner at `target` with a quarter circle.
    ///
    /// The corner is found by replaying the path: a line whose end cursor
    /// equals `target` exactly, followed by a line on the other axis. The
    /// first line is shortened by `radius`, an arc is inserted and the
    /// following line is shortened by `radius` so the end position of the
    /// path is unchanged. Without a matching corner the result is an
    /// unchanged copy. A matching line with nothing after it stays sharp.
    pub fn add_rounded_edge_at(&self, radius: f64, target: Point) -> Result<Path> {
        let radius = check_radius(radius)?;
        let mut result = Path::with_capacity(self.atoms.len() + 1);
        let mut cursor = Point::ORIGIN;
        let mut rounded = 0usize;
        let mut index = 0;

        while index < self.atoms.len() {
            let atom = self.atoms[index];
            cursor = atom.advance(cursor);
            index += 1;

            if cursor == target {
                let next = self.atoms.get(index).copied();
                let splice = atom
                    .as_line()
                    .zip(next.and_then(|n| n.as_line()))
                    .and_then(|(incoming, outgoing)| fillet(incoming, outgoing, radius));

                if let (Some(atoms), Some(next)) = (splice, next) {
                    debug!(corner = %target, radius, "rounding corner");
                    result.atoms.extend(atoms);
                    cursor = next.advance(cursor);
                    index += 1;
                    rounded += 1;
                    continue;
                }
            }

            result.push(atom);
        }

        if rounded == 0 {
            debug!(corner = %target, "no roundable corner at target");
        }
        Ok(result)
    }

    /// Appends a line and rounds the corner where it starts.
    pub fn line_by_with_corner(mut self, radius: f64, offset: Vector2) -> Result<Path> {
        let radius = check_radius(radius)?;
        let corner = self.final_position();
        self.line_by(offset);
        self.add_rounded_edge_at(radius, corner)
    }
}

/// Shortened incoming line, quarter arc and shortened outgoing line for a
/// turn between two perpendicular axis-aligned lines.
fn fillet(incoming: Vector2, outgoing: Vector2, radius: f64) -> Option<[PathAtom; 3]> {
    let (in_axis, out_axis) = (incoming.axis()?, outgoing.axis()?);
    if in_axis == out_axis {
        return None;
    }
    let d_in = incoming.unit_along_axis()?;
    let d_out = outgoing.unit_along_axis()?;

    Some([
        PathAtom::LineBy(incoming - d_in * radius),
        PathAtom::Arc {
            radius,
            end: d_in * radius + d_out * radius,
            large_arc: false,
            sweep: d_in.cross(d_out) > 0.0,
        },
        PathAtom::LineBy(outgoing - d_out * radius),
    ])
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}

impl From<Vec<PathAtom>> for Path {
    fn from(atoms: Vec<PathAtom>) -> Self {
        Self { atoms }
    }
}

impl FromIterator<PathAtom> for Path {
    fn from_iter<I: IntoIterator<Item = PathAtom>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathAtom> for Path {
    fn extend<I: IntoIterator<Item = PathAtom>>(&mut self, iter: I) {
        self.atoms.extend(iter);
    }
}

impl IntoIterator for Path {
    type Item = PathAtom;
    type IntoIter = std::vec::IntoIter<PathAtom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathAtom;
    type IntoIter = std::slice::Iter<'a, PathAtom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
