use boxmaker_core::{Direction, FrameSettings, Path, PathAtom, Point, Vector2};

fn perpendicular_offsets(path: &Path, direction: Direction) -> Vec<f64> {
    let walk_in = direction.walk_in();
    path.positions()
        .map(|p| p.x * walk_in.x + p.y * walk_in.y)
        .collect()
}

fn along(point: Point, direction: Direction) -> f64 {
    let frame_move = direction.frame_move();
    point.x * frame_move.x + point.y * frame_move.y
}

#[test]
fn test_comb_covers_edge_length_in_every_direction() {
    let settings = FrameSettings::default();
    for direction in Direction::ALL {
        for inverse in [false, true] {
            let path = settings.box_frames(100.0, direction, inverse, None).unwrap();
            let end = path.final_position();
            assert_eq!(along(end, direction), 100.0, "{direction} inverse={inverse}");
            let walk_in = direction.walk_in();
            assert_eq!(end.x * walk_in.x + end.y * walk_in.y, 0.0);
        }
    }
}

#[test]
fn test_inverse_comb_is_phase_shifted() {
    let settings = FrameSettings::default();
    let plain = settings.box_frames(70.0, Direction::Up, false, Some(4.0)).unwrap();
    let inverse = settings.box_frames(70.0, Direction::Up, true, Some(4.0)).unwrap();

    assert_eq!(
        along(plain.final_position(), Direction::Up),
        along(inverse.final_position(), Direction::Up)
    );

    // The plain comb starts on the baseline and steps in for the first tab;
    // the inverse comb starts stepped in and steps out at the same place.
    let plain_offsets = perpendicular_offsets(&plain, Direction::Up);
    let inverse_offsets = perpendicular_offsets(&inverse, Direction::Up);
    assert_eq!(plain_offsets[0], 0.0);
    assert_eq!(inverse_offsets[0], 4.0);
    assert_eq!(plain_offsets[2], 4.0);
    assert_eq!(inverse_offsets[3], 0.0);

    let plain_max = plain_offsets.iter().cloned().fold(f64::MIN, f64::max);
    let inverse_min = inverse_offsets.iter().cloned().fold(f64::MAX, f64::min);
    assert_eq!(plain_max, 4.0);
    assert_eq!(inverse_min, 0.0);
}

#[test]
fn test_short_edge_degenerates_to_straight_run() {
    let settings = FrameSettings::default();
    // shorter than 2 * frame_edges_min + frame_length
    let length = 18.0;
    let path = settings.box_frames(length, Direction::Left, false, None).unwrap();
    assert_eq!(path.len(), 2);

    let simplified = path.simplify();
    assert_eq!(simplified.atoms(), &[PathAtom::line(length, 0.0)]);
}

#[test]
fn test_short_inverse_edge_steps_in_and_out() {
    let settings = FrameSettings::default();
    let path = settings.box_frames(12.0, Direction::Down, true, None).unwrap();
    assert_eq!(
        path.atoms(),
        &[
            PathAtom::line(-4.0, 0.0),
            PathAtom::line(0.0, -6.0),
            PathAtom::line(0.0, -6.0),
            PathAtom::line(4.0, 0.0),
        ]
    );
}

#[test]
fn test_custom_depth_overrides_thickness() {
    let settings = FrameSettings::default();
    let path = settings.box_frames(70.0, Direction::Right, true, Some(7.5)).unwrap();
    assert_eq!(path.atoms()[0].as_line(), Some(Vector2::new(0.0, 7.5)));
    assert_eq!(path.atoms().last().and_then(|a| a.as_line()), Some(Vector2::new(0.0, -7.5)));
}

#[test]
fn test_render_comb() {
    let settings = FrameSettings::new(10.0, 5.0, 3.0).unwrap();
    let rendered = settings
        .box_frames(40.0, Direction::Left, false, None)
        .unwrap()
        .simplify()
        .to_svg_d();
    // (40 - 20) / 10 = 2 in/out frames -> one tab pair, 10mm margins
    assert_eq!(
        rendered,
        "l 15.000000 0.000000 l 0.000000 -3.000000 l 10.000000 0.000000 \
         l 0.000000 3.000000 l 15.000000 0.000000"
    );
}
