use boxmaker_core::{Direction, FrameSettings, Path, PathAtom, Point, Vector2};

fn line(dx: f64, dy: f64) -> PathAtom {
    PathAtom::line(dx, dy)
}

fn sample_outline() -> Path {
    let settings = FrameSettings::default();
    let mut path = Path::new();
    path.move_to(Point::new(10.0, 10.0));
    path.extend(settings.box_frames(70.0, Direction::Up, false, None).unwrap());
    path.line_by(Vector2::new(0.0, -4.0));
    path.extend(settings.box_frames(100.0, Direction::Up, false, None).unwrap());
    path.line_by(Vector2::new(0.0, 0.0));
    path.push(PathAtom::arc(3.0, Vector2::new(3.0, 3.0), false, true).unwrap());
    path.extend(settings.box_frames(120.0, Direction::Left, true, Some(2.5)).unwrap());
    path.push(line(1.0, 1.0));
    path.push(line(-2.0, 0.0));
    path
}

#[test]
fn test_three_lines_merge_to_two() {
    let path = Path::from(vec![line(0.0, 10.0), line(0.0, 10.0), line(10.0, 0.0)]);
    assert_eq!(path.len(), 3);

    let simplified = path.simplify();
    assert_eq!(simplified.len(), 2);
    assert_eq!(simplified.atoms()[0], line(0.0, 20.0));
    assert_eq!(simplified.atoms()[1], line(10.0, 0.0));
}

#[test]
fn test_zero_line_is_dropped() {
    let path = Path::from(vec![
        PathAtom::move_to(0.0, 10.0),
        line(0.0, 10.0),
        line(0.0, 0.0),
        line(10.0, 0.0),
    ]);
    let simplified = path.simplify();
    assert_eq!(simplified.len(), path.len() - 1);
    assert_eq!(simplified.final_position(), path.final_position());
}

#[test]
fn test_simplify_preserves_final_position() {
    let path = sample_outline();
    assert_eq!(path.simplify().final_position(), path.final_position());
}

#[test]
fn test_simplify_is_idempotent() {
    let once = sample_outline().simplify();
    let twice = once.simplify();
    assert_eq!(once, twice);
    assert_eq!(once.to_svg_d(), twice.to_svg_d());
}

#[test]
fn test_cancelled_run_merges_with_earlier_line() {
    let path = Path::from(vec![line(0.0, 5.0), line(3.0, 0.0), line(-3.0, 0.0)]);
    let once = path.simplify();
    assert_eq!(once.atoms(), &[line(0.0, 5.0)]);
    assert_eq!(once.simplify(), once);

    let path = Path::from(vec![
        line(0.0, 5.0),
        line(3.0, 0.0),
        line(-3.0, 0.0),
        line(0.0, 2.0),
    ]);
    assert_eq!(path.simplify().atoms(), &[line(0.0, 7.0)]);
}

#[test]
fn test_cancelled_run_after_move_keeps_zero_line() {
    let path = Path::from(vec![
        PathAtom::move_to(1.0, 1.0),
        line(3.0, 0.0),
        line(-3.0, 0.0),
    ]);
    let once = path.simplify();
    assert_eq!(once.atoms(), &[PathAtom::move_to(1.0, 1.0), line(0.0, 0.0)]);
    assert_eq!(once.simplify(), once);
}

#[test]
fn test_simplify_shrinks_comb_margins() {
    let settings = FrameSettings::default();
    let comb = settings.box_frames(70.0, Direction::Up, false, None).unwrap();
    // margin + half frame merge at the start, half frame + margin at the end,
    // and the two half frames inside every tab and notch
    assert_eq!(comb.len(), 14);
    assert_eq!(comb.simplify().len(), 9);
}

#[test]
fn test_simplify_empty_path() {
    assert!(Path::new().simplify().is_empty());
}
