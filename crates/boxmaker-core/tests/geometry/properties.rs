// Properties that hold for arbitrary paths. Coordinates are small integers
// so cursor sums stay exact.

use boxmaker_core::{Path, PathAtom, Point, Vector2};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    (-4i32..=4).prop_map(f64::from)
}

fn axis_line() -> impl Strategy<Value = PathAtom> {
    prop_oneof![
        coord().prop_map(|dx| PathAtom::line(dx, 0.0)),
        coord().prop_map(|dy| PathAtom::line(0.0, dy)),
    ]
}

fn atom() -> impl Strategy<Value = PathAtom> {
    prop_oneof![
        6 => axis_line(),
        1 => (coord(), coord()).prop_map(|(dx, dy)| PathAtom::line(dx, dy)),
        1 => (coord(), coord()).prop_map(|(x, y)| PathAtom::move_to(x, y)),
        1 => (coord(), coord()).prop_map(|(dx, dy)| PathAtom::move_by(dx, dy)),
        1 => (1u8..=5, coord(), coord(), any::<bool>(), any::<bool>()).prop_map(
            |(radius, dx, dy, large_arc, sweep)| PathAtom::Arc {
                radius: f64::from(radius),
                end: Vector2::new(dx, dy),
                large_arc,
                sweep,
            }
        ),
    ]
}

fn path() -> impl Strategy<Value = Path> {
    prop::collection::vec(atom(), 0..24).prop_map(Path::from)
}

proptest! {
    #[test]
    fn test_simplify_keeps_final_position(path in path()) {
        prop_assert_eq!(path.simplify().final_position(), path.final_position());
    }

    #[test]
    fn test_simplify_twice_equals_once(path in path()) {
        let once = path.simplify();
        prop_assert_eq!(once.simplify(), once);
    }

    #[test]
    fn test_simplify_never_adds_atoms(path in path()) {
        prop_assert!(path.simplify().len() <= path.len());
    }

    #[test]
    fn test_rounding_off_grid_target_changes_nothing(
        path in path(),
        x in -20i32..20,
        y in -20i32..20,
        radius in 1u8..=5
    ) {
        let target = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        let rounded = path.add_rounded_edge_at(f64::from(radius), target).unwrap();
        prop_assert_eq!(rounded.to_svg_d(), path.to_svg_d());
        prop_assert_eq!(rounded, path);
    }
}
