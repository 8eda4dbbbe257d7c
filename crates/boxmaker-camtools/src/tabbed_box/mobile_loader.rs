//! Mobile loader accessory
//!
//! A phone stand that sits in the lid of a hinged box: an inclined back
//! rest, a support with finger joints, a shelf with a USB plug cut-out and
//! a test piece. The lid itself gets support boxes with USB holes.

use boxmaker_core::{Direction, Path, Point};
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

use super::{v, BoxParameters, MobileLoaderParameters, TabbedBoxMaker};
use crate::drawing::Color;
use crate::error::{CamToolResult, ParameterError, ParameterResult};

pub(super) fn validate(loader: &MobileLoaderParameters) -> ParameterResult<()> {
    for (name, value) in [
        ("back_rest_height", loader.back_rest_height),
        ("back_rest_width", loader.back_rest_width),
        ("support_distance", loader.support_distance),
        ("distance_between_supports", loader.distance_between_supports),
        ("shelf_height", loader.shelf_height),
        ("shelf_length", loader.shelf_length),
        ("usb_width", loader.usb_width),
        ("usb_depth", loader.usb_depth),
        ("usb_height", loader.usb_height),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(ParameterError::InvalidDimensions(format!(
                "{name} must be positive, got {value}"
            )));
        }
    }
    if !(loader.inclination > 0.0 && loader.inclination < 90.0) {
        return Err(ParameterError::OutOfRange {
            name: "inclination".to_string(),
            value: loader.inclination,
            min: 0.0,
            max: 90.0,
        });
    }
    if loader.usb_width < loader.usb_depth {
        return Err(ParameterError::InvalidValue {
            name: "usb_width".to_string(),
            reason: "must not be smaller than usb_depth".to_string(),
        });
    }
    if loader.shelf_length <= loader.usb_depth {
        return Err(ParameterError::InvalidValue {
            name: "shelf_length".to_string(),
            reason: "must exceed usb_depth".to_string(),
        });
    }
    Ok(())
}

/// Derived lengths of the inclined stand.
struct StandGeometry {
    /// Horizontal run of the inclined material
    dx: f64,
    /// Tab depth across the inclined material
    dx_plus_d: f64,
    frame_width: f64,
    support_height: f64,
    support_extra: f64,
    shelf_support_height: f64,
    shelf_back_length: f64,
}

impl StandGeometry {
    fn new(loader: &MobileLoaderParameters, t: f64) -> Self {
        let inclination = loader.inclination_rad();
        let (sin, cos, tan) = (inclination.sin(), inclination.cos(), inclination.tan());

        let dx = (FRAC_PI_2 - inclination).tan() * t;
        let dx_plus_d = dx / sin + t;
        let support_height = loader.support_distance * tan;
        let shelf_support_height =
            (loader.shelf_height / cos - (loader.support_distance + t)) / tan;
        let l = loader.support_distance * (support_height - shelf_support_height - dx_plus_d)
            / support_height;

        Self {
            dx,
            dx_plus_d,
            frame_width: t / sin,
            support_height,
            support_extra: t / cos,
            shelf_support_height,
            shelf_back_length: l / sin,
        }
    }
}

fn slot_row(maker: &mut TabbedBoxMaker, mut at: Point, count: usize, dx: f64, dy: f64, color: Color) {
    let step = maker.params.frame_length * 2.0;
    for _ in 0..count {
        maker.drawing.insert_rect(at, dx, dy, color);
        at = at.add(step, 0.0);
    }
}

/// Support boxes with USB holes on the lid of the box.
pub(super) fn draw_support_boxes(maker: &mut TabbedBoxMaker, top_start: Point) -> CamToolResult<()> {
    let BoxParameters {
        width: w,
        depth: d,
        thickness: t,
        frame_length: fl,
        ..
    } = maker.params;
    let loader = maker.loader.clone();
    let geometry = StandGeometry::new(&loader, t);

    let number_of_supports =
        ((w - t).floor() / loader.distance_between_supports).floor() as usize;
    let remainder = (w - t) - loader.distance_between_supports * number_of_supports as f64;
    let frames = maker.frames.layout(loader.back_rest_width);
    let hole_length = loader.shelf_length - loader.usb_depth;
    let corner = loader.usb_depth * 0.3;
    let extra = (loader.usb_width - loader.usb_depth) / 2.0;

    for support in 0..number_of_supports {
        let box_start = top_start.add(
            t + remainder / 2.0 + loader.distance_between_supports * support as f64,
            (d - loader.back_rest_width) / 2.0,
        );
        maker.drawing.insert_rect(
            box_start,
            loader.distance_between_supports,
            loader.back_rest_width,
            Color::Red,
        );

        let mut stand_slot = box_start.add(t + hole_length, frames.remainder + 0.5 * fl);
        let mut support_slot = box_start.add(
            t + hole_length + geometry.dx_plus_d + loader.support_distance,
            frames.remainder + 0.5 * fl,
        );
        for _ in 0..frames.frame_count {
            maker
                .drawing
                .insert_rect(stand_slot, geometry.dx_plus_d, fl, Color::Blue);
            stand_slot = stand_slot.add(0.0, fl * 2.0);
            maker.drawing.insert_rect(support_slot, t, fl, Color::Blue);
            support_slot = support_slot.add(0.0, fl * 2.0);
        }

        let hole_start = box_start.add(
            0.5 * t + hole_length,
            loader.back_rest_width / 2.0 - loader.usb_width / 2.0,
        );
        maker.drawing.mark_point(hole_start, Color::Blue);

        let mut hole = Path::new();
        hole.move_to(hole_start);
        hole.line_by(v(0.0, loader.usb_width));
        hole.line_by(v(-loader.usb_depth, 0.0));
        hole.line_by(v(0.0, -extra));
        let mut hole = hole
            .line_by_with_corner(corner, v(-hole_length + loader.usb_depth, 0.0))?
            .line_by_with_corner(corner, v(0.0, -loader.usb_depth))?
            .line_by_with_corner(corner, v(hole_length - loader.usb_depth, 0.0))?
            .line_by_with_corner(corner, v(0.0, -extra))?;
        hole.line_by(v(loader.usb_depth, 0.0));
        maker.drawing.insert_path(hole, Color::Orange);
    }
    debug!(supports = number_of_supports, "lid support boxes");
    Ok(())
}

/// Back rest, support, USB shelf and test piece, placed right of the lid.
pub(super) fn draw_stand(maker: &mut TabbedBoxMaker, start: Point) -> CamToolResult<()> {
    let BoxParameters {
        width: w,
        height: h,
        thickness: t,
        frame_length: fl,
        hinge_circle_factor,
        ..
    } = maker.params;
    let loader = maker.loader.clone();
    let geometry = StandGeometry::new(&loader, t);
    let brw = loader.back_rest_width;
    let frames = maker.frames.layout(brw);

    let back_rest_start = start.add(w + h + hinge_circle_factor * t + w + t, 0.0);
    maker.drawing.insert_text(
        format!(
            "Mobile Stand  --- Inclination: {:.2} deg, Width: {:.2}mm, Height: {:.2}mm (Support Distance {:.2}mm)",
            loader.inclination, brw, loader.back_rest_height, loader.support_distance
        ),
        back_rest_start.add(-2.0, -2.0),
        Color::Orange,
    );

    // back rest
    let frame_depth = geometry.frame_width + t;
    let mut back_rest = Path::new();
    back_rest.move_to(back_rest_start);
    back_rest.line_by(v(0.0, loader.back_rest_height + frame_depth));
    back_rest.arc_by(t, v(t, t), false, false)?;
    back_rest.line_by(v(brw - 2.0 * t, 0.0));
    back_rest.arc_by(t, v(t, -t), false, false)?;
    back_rest.line_by(v(0.0, -loader.back_rest_height - frame_depth));
    back_rest.extend(
        maker
            .frames
            .box_frames(brw, Direction::Right, true, Some(frame_depth))?,
    );
    maker.drawing.insert_path(back_rest.simplify(), Color::Orange);

    let inclination = loader.inclination_rad();
    let support_frame_width = t * (inclination.tan() + inclination.cos());
    slot_row(
        maker,
        back_rest_start.add(
            frames.remainder + fl / 2.0,
            frame_depth + geometry.support_height / inclination.sin(),
        ),
        frames.frame_count,
        fl,
        support_frame_width,
        Color::Orange,
    );

    let shelf_frame_width = loader.shelf_height - t * (inclination.cos() / inclination.sin());
    maker.drawing.insert_rect(
        back_rest_start.add(brw / 4.0, frame_depth + shelf_frame_width),
        brw / 2.0,
        t,
        Color::Orange,
    );

    // support
    let support_start = back_rest_start.add(brw + t, 0.0);
    let support_rise = geometry.support_height + t + geometry.support_extra;
    let mut support = Path::new();
    support.move_to(support_start);
    support.line_by(v(0.0, support_rise));
    support.extend(maker.frames.box_frames(
        brw,
        Direction::Left,
        true,
        Some(geometry.support_extra),
    )?);
    support.line_by(v(0.0, -support_rise));
    support.extend(maker.frames.box_frames(brw, Direction::Right, true, None)?);
    maker.drawing.insert_path(support.simplify(), Color::Orange);

    maker.drawing.insert_rect(
        support_start.add((brw - fl) / 2.0, geometry.shelf_support_height + t),
        fl,
        geometry.dx_plus_d,
        Color::Orange,
    );

    // USB shelf
    let shelf_start = support_start.add(brw + t, 0.0);
    let half_width = brw / 2.0;
    let small = loader.usb_depth / 2.0;
    let smaller = small / 2.0;
    let plug_offset = smaller;
    let plug_side = loader.usb_width / 2.0 - loader.usb_depth / 2.0;
    let sl = loader.shelf_length;

    let mut shelf = Path::new();
    shelf.move_to(shelf_start.add(t, 0.0));
    shelf.line_by(v(half_width - t - 2.0 * small, 0.0));
    shelf.arc_by(small, v(small, small), false, true)?;
    shelf.line_by(v(0.0, sl - small - loader.usb_depth - plug_offset));
    maker.drawing.mark_point(shelf.final_position(), Color::Blue);

    let mut shelf = shelf.line_by_with_corner(smaller, v(-plug_side, 0.0))?;
    shelf.line_by(v(0.0, loader.usb_depth));
    let mut shelf = shelf
        .line_by_with_corner(smaller, v(loader.usb_width, 0.0))?
        .line_by_with_corner(smaller, v(0.0, -loader.usb_depth))?;
    shelf.line_by(v(-plug_side, 0.0));
    let shelf = shelf.line_by_with_corner(smaller, v(0.0, -(sl - loader.usb_depth) + plug_offset))?;
    maker.drawing.mark_point(shelf.final_position(), Color::Blue);
    let mut shelf = shelf.line_by_with_corner(small, v(half_width - t - small, 0.0))?;
    shelf.arc_by(t, v(t, t), false, true)?;
    shelf.line_by(v(0.0, sl - t));
    shelf.line_by(v(-brw / 4.0, 0.0));

    let tongue = (brw / 2.0 - fl) / 2.0;
    shelf.line_by(v(0.0, geometry.shelf_back_length + t));
    shelf.line_by(v(-tongue, 0.0));
    shelf.line_by(v(0.0, geometry.dx_plus_d));
    shelf.line_by(v(-fl, 0.0));
    shelf.line_by(v(0.0, -geometry.dx_plus_d));
    shelf.line_by(v(-tongue, 0.0));
    shelf.line_by(v(0.0, -geometry.shelf_back_length - t));

    shelf.line_by(v(-brw / 4.0, 0.0));
    shelf.line_by(v(0.0, -sl + t));
    shelf.arc_by(t, v(t, -t), false, true)?;
    maker.drawing.insert_path(shelf, Color::Orange);

    // test piece
    let hole_length = sl - loader.usb_depth;
    let test_start = shelf_start.add(0.0, sl + 3.0 * t + tongue);
    maker.drawing.insert_rect(
        test_start,
        brw,
        2.0 * loader.support_distance + hole_length,
        Color::Red,
    );
    slot_row(
        maker,
        test_start.add(frames.remainder + fl / 2.0, 2.0 * t + hole_length),
        frames.frame_count,
        fl,
        geometry.dx_plus_d,
        Color::Blue,
    );
    slot_row(
        maker,
        test_start.add(
            frames.remainder + fl / 2.0,
            3.0 * t + loader.support_distance + hole_length,
        ),
        frames.frame_count,
        fl,
        t,
        Color::Blue,
    );

    let extra = (loader.usb_width - loader.usb_depth) / 2.0;
    let mut hole = Path::new();
    hole.move_to(test_start.add(
        brw / 2.0 - loader.usb_width / 2.0,
        2.0 * t + hole_length - loader.usb_depth / 2.0,
    ));
    hole.line_by(v(loader.usb_width, 0.0));
    hole.line_by(v(0.0, -loader.usb_depth));
    hole.line_by(v(-extra, 0.0));
    let mut hole = hole
        .line_by_with_corner(smaller, v(0.0, -hole_length + loader.usb_depth))?
        .line_by_with_corner(smaller, v(-loader.usb_depth, 0.0))?
        .line_by_with_corner(smaller, v(0.0, hole_length - loader.usb_depth))?
        .line_by_with_corner(smaller, v(-extra, 0.0))?;
    hole.line_by(v(0.0, loader.usb_depth));
    maker.drawing.insert_path(hole, Color::Orange);

    debug!(
        inclination = loader.inclination,
        dx = geometry.dx,
        "mobile loader stand"
    );
    Ok(())
}
