//! Drawing document
//!
//! Collects the stroked outlines, labels and circles a box layout produces
//! and serializes them as a standalone SVG document in millimetres.

use boxmaker_core::{Path, Point, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path as FsPath;
use tracing::debug;

use crate::error::CamToolResult;

/// Font size of every text label, in user units.
pub const LABEL_FONT_SIZE: f64 = 3.0;

/// Stroke width of debug markers.
const MARKER_STROKE_WIDTH: f64 = 2.0;
/// Radius of debug marker circles.
const MARKER_RADIUS: f64 = 4.0;
/// Offset from a marker to its coordinate label.
const MARKER_LABEL_OFFSET: f64 = 5.0;

/// Stroke colours used by the layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawingElement {
    Path {
        path: Path,
        color: Color,
    },
    Text {
        text: String,
        position: Point,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
    },
    /// Numbered debug marker: a thick circle plus its coordinates.
    Marker {
        index: usize,
        center: Point,
        color: Color,
    },
}

impl DrawingElement {
    /// Points that must lie inside the view box.
    fn extent(&self) -> Vec<Point> {
        match self {
            DrawingElement::Path { path, .. } => path.positions().collect(),
            DrawingElement::Text { position, .. } => {
                vec![*position, position.add(0.0, -LABEL_FONT_SIZE)]
            }
            DrawingElement::Circle { center, radius, .. } => circle_extent(*center, *radius),
            DrawingElement::Marker { center, .. } => {
                let mut points = circle_extent(*center, MARKER_RADIUS + MARKER_STROKE_WIDTH / 2.0);
                points.push(center.add(MARKER_LABEL_OFFSET, MARKER_LABEL_OFFSET));
                points
            }
        }
    }
}

fn circle_extent(center: Point, radius: f64) -> Vec<Point> {
    vec![center.add(-radius, -radius), center.add(radius, radius)]
}

/// Axis-aligned bounds of a drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    fn expand(self, by: f64) -> Bounds {
        Bounds {
            min: self.min.translate(Vector2::new(-by, -by)),
            max: self.max.translate(Vector2::new(by, by)),
        }
    }
}

/// SVG output options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvgOptions {
    /// Stroke width of outlines, in millimetres.
    pub stroke_width: f64,
    /// Padding around the drawn elements, in millimetres.
    pub margin: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            stroke_width: 0.1,
            margin: 10.0,
        }
    }
}

/// Ordered collection of drawing elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    elements: Vec<DrawingElement>,
    debug_markers: bool,
    marker_count: usize,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drawing that records [`Drawing::mark_point`] calls.
    pub fn with_debug_markers(enabled: bool) -> Self {
        Self {
            debug_markers: enabled,
            ..Self::default()
        }
    }

    pub fn elements(&self) -> &[DrawingElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Stroked outlines, in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = (&Path, Color)> + '_ {
        self.elements.iter().filter_map(|e| match e {
            DrawingElement::Path { path, color } => Some((path, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().filter_map(|e| match e {
            DrawingElement::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn insert_path(&mut self, path: Path, color: Color) {
        self.elements.push(DrawingElement::Path { path, color });
    }

    /// Inserts a rectangle as a closed four-line path starting at its
    /// top-left corner.
    pub fn insert_rect(&mut self, start: Point, dx: f64, dy: f64, color: Color) {
        let mut rect = Path::with_capacity(5);
        rect.move_to(start);
        rect.line_by(Vector2::new(dx, 0.0));
        rect.line_by(Vector2::new(0.0, dy));
        rect.line_by(Vector2::new(-dx, 0.0));
        rect.line_by(Vector2::new(0.0, -dy));
        self.insert_path(rect, color);
    }

    pub fn insert_text(&mut self, text: impl Into<String>, position: Point, color: Color) {
        self.elements.push(DrawingElement::Text {
            text: text.into(),
            position,
            color,
        });
    }

    pub fn insert_circle(&mut self, radius: f64, center: Point, color: Color) {
        self.elements.push(DrawingElement::Circle {
            center,
            radius,
            color,
        });
    }

    /// Marks a point with a numbered marker when debug markers are enabled.
    pub fn mark_point(&mut self, center: Point, color: Color) {
        if !self.debug_markers {
            return;
        }
        self.marker_count += 1;
        debug!(index = self.marker_count, %center, "debug marker");
        self.elements.push(DrawingElement::Marker {
            index: self.marker_count,
            center,
            color,
        });
    }

    /// Bounds of every element, `None` for an empty drawing.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.elements.iter().flat_map(DrawingElement::extent);
        let first = points.next()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for p in points {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Serializes the drawing as an SVG document.
    pub fn to_svg(&self, options: &SvgOptions) -> String {
        self.svg(options).to_string()
    }

    /// SVG view of the drawing, written through `Display`.
    pub fn svg<'a>(&'a self, options: &'a SvgOptions) -> SvgDocument<'a> {
        SvgDocument {
            drawing: self,
            options,
        }
    }

    /// Writes the SVG document to `path`.
    pub fn save_svg(&self, path: impl AsRef<FsPath>, options: &SvgOptions) -> CamToolResult<()> {
        let mut file = BufWriter::new(File::create(path.as_ref())?);
        write!(file, "{}", self.svg(options))?;
        file.flush()?;
        debug!(path = %path.as_ref().display(), elements = self.len(), "wrote drawing");
        Ok(())
    }
}

/// Borrowed drawing plus output options, rendered as an SVG document
pub struct SvgDocument<'a> {
    drawing: &'a Drawing,
    options: &'a SvgOptions,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = self
            .drawing
            .bounds()
            .unwrap_or(Bounds {
                min: Point::ORIGIN,
                max: Point::ORIGIN,
            })
            .expand(self.options.margin);
        let (width, height) = (bounds.width(), bounds.height());
        let sw = self.options.stroke_width;

        writeln!(
            f,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg width="{width:.2}mm" height="{height:.2}mm" viewBox="{:.2} {:.2} {width:.2} {height:.2}" xmlns="http://www.w3.org/2000/svg">"#,
            bounds.min.x, bounds.min.y
        )?;

        for element in &self.drawing.elements {
            match element {
                DrawingElement::Path { path, color } => writeln!(
                    f,
                    r#"  <path style="fill:none;stroke:{color};stroke-width:{sw}" d="{path}" />"#
                )?,
                DrawingElement::Text {
                    text,
                    position,
                    color,
                } => writeln!(
                    f,
                    r#"  <text style="stroke:{color};stroke-width:{sw};font-size:{LABEL_FONT_SIZE}px" x="{:.6}" y="{:.6}">{}</text>"#,
                    position.x,
                    position.y,
                    xml_escape(text)
                )?,
                DrawingElement::Circle {
                    center,
                    radius,
                    color,
                } => writeln!(
                    f,
                    r#"  <circle style="fill:none;stroke:{color};stroke-width:{sw}" cx="{:.6}" cy="{:.6}" r="{radius:.6}" />"#,
                    center.x, center.y
                )?,
                DrawingElement::Marker {
                    index,
                    center,
                    color,
                } => writeln!(
                    f,
                    r#"  <circle style="fill:none;stroke:{color};stroke-width:{MARKER_STROKE_WIDTH}" cx="{:.6}" cy="{:.6}" r="{MARKER_RADIUS}" />
  <text style="stroke:black;stroke-width:{sw};font-size:{LABEL_FONT_SIZE}px" x="{:.6}" y="{:.6}">{index}: ({:.2},{:.2})</text>"#,
                    center.x,
                    center.y,
                    center.x + MARKER_LABEL_OFFSET,
                    center.y + MARKER_LABEL_OFFSET,
                    center.x,
                    center.y
                )?,
            }
        }
        writeln!(f, "</svg>")
    }
}

/// Escapes the XML special characters in text content.
pub fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
