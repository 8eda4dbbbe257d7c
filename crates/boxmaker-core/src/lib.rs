//! # Boxmaker Core
//!
//! Path algebra for laser-cut finger-jointed boxes.
//!
//! A panel outline is a [`Path`] of [`PathAtom`]s: absolute and relative
//! moves, relative lines and circular arcs. Edges with finger joints come
//! from [`FrameSettings::box_frames`]; outlines are merged with
//! [`Path::simplify`] and sharp corners softened with
//! [`Path::add_rounded_edge_at`] before rendering to SVG path data.
//!
//! Every operation is a pure computation over owned values; nothing is
//! shared between calls.

pub mod atom;
pub mod direction;
pub mod error;
pub mod frames;
pub mod path;
pub mod point;
pub mod units;

pub use atom::PathAtom;
pub use direction::{Direction, DirectionVectors};
pub use error::{GeometryError, Result};
pub use frames::{FrameLayout, FrameSettings};
pub use path::Path;
pub use point::{Axis, Point, Vector2};
pub use units::{format_length, parse_length, Unit};
