//! Tabbed Box Maker
//!
//! Lays out every panel of a finger-jointed box on one sheet: the combined
//! bottom/front/back outline, the two fold separators, both side panels,
//! optional shelves and lid, and for [`BoxType::MobileLoader`] the phone
//! stand accessory. All panels are built from [`FrameSettings::box_frames`]
//! combs and written into a [`Drawing`].

mod mobile_loader;
mod types;

pub use types::{BoxParameters, BoxType, MobileLoaderParameters};

use boxmaker_core::{format_length, Direction, FrameSettings, Path, Point, Unit, Vector2};
use chrono::{Local, NaiveDateTime};
use std::f64::consts::SQRT_2;
use tracing::{debug, info};

use crate::drawing::{Color, Drawing, SvgOptions};
use crate::error::{CamToolResult, ParameterError, ParameterResult};

/// Top-left corner of the layout on the sheet.
const LAYOUT_ORIGIN: Point = Point::new(10.0, 10.0);
/// Gap between the main outline and the side panels.
const PANEL_GAP: f64 = 2.0;
/// Offset of the info label from the layout origin.
const LABEL_OFFSET: Vector2 = Vector2::new(-2.0, -2.0);

pub(crate) fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

pub struct TabbedBoxMaker {
    params: BoxParameters,
    loader: MobileLoaderParameters,
    frames: FrameSettings,
    generated_at: NaiveDateTime,
    label_unit: Unit,
    drawing: Drawing,
}

impl TabbedBoxMaker {
    pub fn new(params: BoxParameters) -> CamToolResult<Self> {
        Self::validate_parameters(&params)?;
        let frames = params.frame_settings();
        frames.validate()?;

        Ok(Self {
            frames,
            drawing: Drawing::with_debug_markers(params.debug),
            params,
            loader: MobileLoaderParameters::default(),
            generated_at: Local::now().naive_local(),
            label_unit: Unit::Mm,
        })
    }

    /// Replaces the mobile-loader dimensions.
    pub fn with_mobile_loader(mut self, loader: MobileLoaderParameters) -> CamToolResult<Self> {
        mobile_loader::validate(&loader)?;
        self.loader = loader;
        Ok(self)
    }

    /// Fixes the generation time printed in the info label.
    pub fn with_timestamp(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Unit the info label prints lengths in. Geometry stays in millimetres.
    pub fn with_label_unit(mut self, unit: Unit) -> Self {
        self.label_unit = unit;
        self
    }

    pub fn validate_parameters(params: &BoxParameters) -> ParameterResult<()> {
        for (name, value) in [
            ("width", params.width),
            ("depth", params.depth),
            ("height", params.height),
            ("thickness", params.thickness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParameterError::InvalidDimensions(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let smallest = params.width.min(params.depth).min(params.height);
        if params.thickness >= smallest {
            return Err(ParameterError::OutOfRange {
                name: "thickness".to_string(),
                value: params.thickness,
                min: 0.0,
                max: smallest,
            });
        }

        if params.shelf_count < 1 {
            return Err(ParameterError::InvalidValue {
                name: "shelf_count".to_string(),
                reason: "at least one shelf is required".to_string(),
            });
        }
        if params.box_type == BoxType::ShelvedBox && params.shelf_height() <= 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "shelf_count".to_string(),
                reason: format!(
                    "{} shelves do not fit into a width of {}",
                    params.shelf_count, params.width
                ),
            });
        }

        if !(params.hinge_circle_factor.is_finite() && params.hinge_circle_factor > 0.0) {
            return Err(ParameterError::InvalidValue {
                name: "hinge_circle_factor".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if params.box_type.has_hinges() && params.hinge_radius() <= params.thickness / 2.0 {
            return Err(ParameterError::OutOfRange {
                name: "hinge_circle_factor".to_string(),
                value: params.hinge_circle_factor,
                min: 0.5,
                max: f64::INFINITY,
            });
        }

        Ok(())
    }

    pub fn params(&self) -> &BoxParameters {
        &self.params
    }

    pub fn mobile_loader(&self) -> &MobileLoaderParameters {
        &self.loader
    }

    pub fn frame_settings(&self) -> &FrameSettings {
        &self.frames
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn into_drawing(self) -> Drawing {
        self.drawing
    }

    pub fn to_svg(&self, options: &SvgOptions) -> String {
        self.drawing.to_svg(options)
    }

    /// Generation time as printed in the info label.
    pub fn timestamp_label(&self) -> String {
        self.generated_at.format("%d.%m.%y %H:%M").to_string()
    }

    /// Lays out all panels, replacing any previous drawing.
    pub fn generate(&mut self) -> CamToolResult<()> {
        self.drawing = Drawing::with_debug_markers(self.params.debug);
        let start = LAYOUT_ORIGIN;
        let box_type = self.params.box_type;

        self.draw_info_label(start);
        self.draw_bottom_front_back(start)?;
        self.draw_separators(start)?;
        if box_type == BoxType::ShelvedBox {
            self.draw_shelf_slots(start);
        }
        self.draw_side_panels(start)?;
        if box_type == BoxType::ShelvedBox {
            self.draw_shelves(start)?;
        }
        if box_type.has_hinges() {
            let top_start = self.draw_top(start);
            if box_type == BoxType::MobileLoader {
                mobile_loader::draw_support_boxes(self, top_start)?;
            }
        }
        if box_type == BoxType::MobileLoader {
            mobile_loader::draw_stand(self, start)?;
        }

        info!(
            box_type = %box_type,
            width = self.params.width,
            depth = self.params.depth,
            height = self.params.height,
            elements = self.drawing.len(),
            "generated box layout"
        );
        Ok(())
    }

    fn comb(&self, length: f64, direction: Direction) -> CamToolResult<Path> {
        Ok(self.frames.box_frames(length, direction, false, None)?)
    }

    /// Horizontal distance from the hinge axis to where the side panel
    /// outline meets the hinge circle.
    fn hinge_dx(&self) -> f64 {
        let outer = self.params.hinge_radius();
        (outer.powi(2) - (self.params.thickness / 2.0).powi(2)).sqrt()
    }

    fn draw_info_label(&mut self, start: Point) {
        let p = &self.params;
        let len = |value: f64| format_length(value, self.label_unit);
        let text = format!(
            "{} (generated on {})  --- Width: {}, Depth: {}, Height: {} (Thickness: {}, frame length: {})[shelfheight: {}]",
            p.box_type.description(),
            self.timestamp_label(),
            len(p.width),
            len(p.depth),
            len(p.height),
            len(p.thickness),
            len(p.frame_length),
            len(p.shelf_height())
        );
        self.drawing
            .insert_text(text, start + LABEL_OFFSET, Color::Orange);
    }

    /// Bottom, front and back as one outline, with combs along both long
    /// sides and the lid recess for hinged boxes.
    fn draw_bottom_front_back(&mut self, start: Point) -> CamToolResult<()> {
        let BoxParameters {
            width: w,
            depth: d,
            height: h,
            thickness: t,
            ..
        } = self.params;
        let hinges = self.params.box_type.has_hinges();
        let back_for_hinge = t / 2.0 + self.params.hinge_radius();
        let hinge_step = back_for_hinge - t * (1.0 + SQRT_2) / 2.0;

        let mut outline = Path::new();
        outline.move_to(start);

        outline.extend(self.comb(h, Direction::Up)?);
        outline.line_by(v(0.0, -t));
        outline.extend(self.comb(d, Direction::Up)?);
        outline.line_by(v(0.0, -t));
        outline.extend(self.comb(h, Direction::Up)?);

        if hinges {
            self.drawing
                .mark_point(outline.final_position(), Color::Yellow);
            outline.line_by(v(0.0, -back_for_hinge));
        }
        outline.line_by(v(t, 0.0));
        if hinges {
            outline.line_by(v(0.0, hinge_step));
        }
        outline.line_by(v(w - 2.0 * t, 0.0));
        if hinges {
            outline.line_by(v(0.0, -hinge_step));
        }
        outline.line_by(v(t, 0.0));
        if hinges {
            outline.line_by(v(0.0, back_for_hinge));
        }
        self.drawing
            .mark_point(outline.final_position(), Color::Yellow);

        outline.extend(self.comb(h, Direction::Down)?);
        outline.line_by(v(0.0, t));
        outline.extend(self.comb(d, Direction::Down)?);
        outline.line_by(v(0.0, t));
        outline.extend(self.comb(h, Direction::Down)?);

        // lid recess on the front top edge
        outline.line_by(v(-t, 0.0));
        if hinges {
            outline.line_by(v(0.0, t));
        }
        outline.line_by(v(-w + 2.0 * t, 0.0));
        if hinges {
            outline.line_by(v(0.0, -t));
        }
        outline.line_by(v(-t, 0.0));

        self.drawing
            .mark_point(outline.final_position(), Color::Green);
        let outline = outline.simplify();
        self.drawing.mark_point(outline.final_position(), Color::Red);
        debug!(atoms = outline.len(), "bottom/front/back outline");
        self.drawing.insert_path(outline, Color::Black);
        Ok(())
    }

    /// Combs along the front/bottom and bottom/back folds.
    fn draw_separators(&mut self, start: Point) -> CamToolResult<()> {
        let BoxParameters {
            width: w,
            depth: d,
            height: h,
            thickness: t,
            ..
        } = self.params;

        let mut first = Path::new();
        first.move_to(start.add(w, h - t));
        first.extend(self.comb(w, Direction::Right)?);
        self.drawing.insert_path(first, Color::Green);

        let mut second = Path::new();
        second.move_to(start.add(0.0, h - t + d));
        second.extend(self.comb(w, Direction::Left)?);
        self.drawing.insert_path(second, Color::Green);
        Ok(())
    }

    /// Slots in the front, back and bottom panels that take the shelf tabs.
    fn draw_shelf_slots(&mut self, start: Point) {
        let BoxParameters {
            depth: d,
            height: h,
            thickness: t,
            frame_length: fl,
            ..
        } = self.params;
        let pitch = self.params.shelf_height() + t;
        let inner_shelves = self.params.shelf_count.saturating_sub(1);

        let wall = self.frames.layout(h);
        for side in 0..2u32 {
            for i in 0..inner_shelves {
                let shelf_start = start.add(
                    f64::from(i + 1) * pitch,
                    f64::from(side) * (d + h - 2.0 * t),
                );
                self.insert_slot_column(shelf_start.add(0.0, wall.remainder + fl / 2.0), wall.frame_count);
            }
        }

        let bottom = self.frames.layout(d);
        for i in 0..inner_shelves {
            let shelf_start = start.add(f64::from(i + 1) * pitch, h - t);
            self.insert_slot_column(
                shelf_start.add(0.0, bottom.remainder + fl / 2.0),
                bottom.frame_count,
            );
        }
        debug!(shelves = inner_shelves, "shelf slots");
    }

    fn insert_slot_column(&mut self, mut slot: Point, count: usize) {
        let (t, fl) = (self.params.thickness, self.params.frame_length);
        for _ in 0..count {
            self.drawing.insert_rect(slot, t, fl, Color::Blue);
            slot = slot.add(0.0, fl * 2.0);
        }
    }

    fn draw_side_panels(&mut self, start: Point) -> CamToolResult<()> {
        let BoxParameters {
            width: w,
            depth: d,
            height: h,
            thickness: t,
            ..
        } = self.params;
        let hinges = self.params.box_type.has_hinges();
        let outer = self.params.hinge_radius();
        let pin_radius = t * SQRT_2 / 2.0;
        let dx = if hinges { self.hinge_dx() } else { 0.0 };

        // left
        let left_start = start.add(w + PANEL_GAP, t);
        if hinges {
            let center = left_start.add(h - t / 2.0, d - t - t / 2.0);
            self.drawing.insert_circle(pin_radius, center, Color::Green);
        }
        let mut left = Path::new();
        left.move_to(left_start);
        left.extend(self.comb(h, Direction::Left)?);
        left.line_by(v(0.0, d - 2.0 * t));
        if hinges {
            left.line_by(v(0.0, 0.5 * t - dx));
            left.arc_by(outer, v(-(dx + t / 2.0), dx + t / 2.0 - t), true, true)?;
            left.line_by(v(dx + t / 2.0, 0.0));
        }
        left.extend(self.comb(h, Direction::Right)?);
        left.line_by(v(t, 0.0));
        left.line_by(v(0.0, t));
        left.extend(self.comb(d, Direction::Down)?);
        self.drawing.insert_path(left.simplify(), Color::Black);

        // right
        let right_start = start.add(w + PANEL_GAP, d + t + 2.0 * outer);
        if hinges {
            let center = right_start.add(h - t / 2.0, -t / 2.0);
            self.drawing.insert_circle(pin_radius, center, Color::Green);
        }
        let mut right = Path::new();
        right.move_to(right_start);
        right.extend(self.comb(h, Direction::Left)?);
        if hinges {
            right.line_by(v(-dx - t / 2.0, 0.0));
            right.arc_by(outer, v(dx + t / 2.0, dx + t / 2.0 - t), true, true)?;
            right.line_by(v(0.0, 0.5 * t - dx));
        }
        right.line_by(v(0.0, d - 2.0 * t));
        right.extend(self.comb(h, Direction::Right)?);
        right.line_by(v(t, 0.0));
        right.line_by(v(0.0, t));
        right.extend(self.comb(d, Direction::Down)?);
        self.drawing.insert_path(right.simplify(), Color::Black);

        debug!(hinges, "side panels");
        Ok(())
    }

    /// Inner shelves for shelved boxes; the outer two are the side panels.
    fn draw_shelves(&mut self, start: Point) -> CamToolResult<()> {
        let BoxParameters {
            width: w,
            depth: d,
            height: h,
            thickness: t,
            ..
        } = self.params;

        for i in 0..self.params.shelf_count.saturating_sub(1) {
            let shelf_start = start.add(w + h + t, t + f64::from(i) * (d + t));
            let mut shelf = Path::new();
            shelf.move_to(shelf_start);
            shelf.extend(self.comb(h, Direction::Left)?);
            shelf.line_by(v(0.0, d - 2.0 * t));
            shelf.extend(self.comb(h, Direction::Right)?);
            shelf.line_by(v(t, 0.0));
            shelf.line_by(v(0.0, t));
            shelf.extend(self.comb(d, Direction::Down)?);
            self.drawing.insert_path(shelf.simplify(), Color::Black);
            debug!(shelf = i + 1, "shelf panel");
        }
        Ok(())
    }

    /// Lid of a hinged box; returns its start corner.
    fn draw_top(&mut self, start: Point) -> Point {
        let BoxParameters {
            width: w,
            depth: d,
            height: h,
            thickness: t,
            ..
        } = self.params;
        let top_start = start.add(w + h + self.params.hinge_radius(), 0.0);

        let mut top = Path::new();
        top.move_to(top_start);
        for step in [
            v(w, 0.0),
            v(0.0, t),
            v(-t, 0.0),
            v(0.0, d - t),
            v(-(w - 2.0 * t), 0.0),
            v(0.0, -d + t),
            v(-t, 0.0),
            v(0.0, -t),
        ] {
            top.line_by(step);
        }
        self.drawing.insert_path(top.simplify(), Color::Black);
        debug!("top panel");
        top_start
    }
}
