//! Panel layout tests for the tabbed box maker

use boxmaker_camtools::{BoxParameters, BoxType, Color, Drawing, TabbedBoxMaker};
use boxmaker_core::{PathAtom, Point};

fn generate(params: BoxParameters) -> Drawing {
    let mut maker = TabbedBoxMaker::new(params).expect("valid parameters");
    maker.generate().expect("generated layout");
    maker.into_drawing()
}

fn arc_count(atoms: &[PathAtom]) -> usize {
    atoms
        .iter()
        .filter(|a| matches!(a, PathAtom::Arc { .. }))
        .count()
}

#[test]
fn test_open_box_outline_is_closed() {
    let drawing = generate(BoxParameters::default());
    let (outline, color) = drawing.paths().next().unwrap();

    assert_eq!(color, Color::Black);
    assert_eq!(outline.atoms()[0], PathAtom::MoveTo(Point::new(10.0, 10.0)));
    assert_eq!(outline.final_position(), Point::new(10.0, 10.0));
    assert!(outline.atoms()[1..].iter().all(PathAtom::is_line));
}

#[test]
fn test_outline_is_simplified() {
    let drawing = generate(BoxParameters::default());
    let panels: Vec<_> = drawing
        .paths()
        .filter(|(_, color)| *color == Color::Black)
        .collect();
    assert_eq!(panels.len(), 3);
    for (path, _) in panels {
        assert_eq!(path.simplify(), *path);
    }
}

#[test]
fn test_separators_span_the_width() {
    let drawing = generate(BoxParameters::default());
    let separators: Vec<_> = drawing
        .paths()
        .filter(|(_, color)| *color == Color::Green)
        .map(|(path, _)| path)
        .collect();

    assert_eq!(separators.len(), 2);
    // start (10,10) + (200, 70 - 4), walked right across the width
    assert_eq!(separators[0].final_position(), Point::new(10.0, 76.0));
    // start + (0, 70 - 4 + 100), walked left
    assert_eq!(separators[1].final_position(), Point::new(210.0, 176.0));
}

#[test]
fn test_hinged_side_panels_have_hinge_arc() {
    let drawing = generate(BoxParameters {
        box_type: BoxType::WithHinges,
        ..Default::default()
    });
    let sides: Vec<_> = drawing
        .paths()
        .filter(|(path, _)| arc_count(path.atoms()) == 1)
        .map(|(path, _)| path)
        .collect();
    assert_eq!(sides.len(), 2);

    for side in sides {
        let arc = side
            .iter()
            .find(|a| matches!(a, PathAtom::Arc { .. }))
            .unwrap();
        assert!(matches!(
            arc,
            PathAtom::Arc {
                radius,
                large_arc: true,
                sweep: true,
                ..
            } if *radius == 6.0
        ));
    }
}

#[test]
fn test_open_box_side_panels_have_no_arcs() {
    let drawing = generate(BoxParameters::default());
    assert!(drawing.paths().all(|(path, _)| arc_count(path.atoms()) == 0));
}

#[test]
fn test_shelved_box_slots_and_panels() {
    let drawing = generate(BoxParameters {
        box_type: BoxType::ShelvedBox,
        shelf_count: 3,
        ..Default::default()
    });

    // 70mm walls fit two tab pairs, the 100mm bottom four; two inner shelves
    let slots = drawing
        .paths()
        .filter(|(_, color)| *color == Color::Blue)
        .count();
    assert_eq!(slots, 2 * 2 * 2 + 2 * 4);

    // outline, two sides and two inner shelves
    let black = drawing
        .paths()
        .filter(|(_, color)| *color == Color::Black)
        .count();
    assert_eq!(black, 3 + 2);
}

#[test]
fn test_single_shelf_draws_no_slots() {
    let drawing = generate(BoxParameters {
        box_type: BoxType::ShelvedBox,
        ..Default::default()
    });
    assert_eq!(
        drawing
            .paths()
            .filter(|(_, color)| *color == Color::Blue)
            .count(),
        0
    );
}

#[test]
fn test_too_many_shelves_rejected() {
    let params = BoxParameters {
        box_type: BoxType::ShelvedBox,
        shelf_count: 60,
        ..Default::default()
    };
    assert!(TabbedBoxMaker::new(params).is_err());
}

#[test]
fn test_invalid_frame_length_rejected() {
    let params = BoxParameters {
        frame_length: 0.0,
        ..Default::default()
    };
    let err = TabbedBoxMaker::new(params).err().unwrap();
    assert!(matches!(
        err,
        boxmaker_camtools::CamToolError::Geometry(_)
    ));
}
