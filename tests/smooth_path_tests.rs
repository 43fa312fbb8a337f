use balanz_charts::core::{PathCommand, smooth_path};

fn anchor_points(path: &balanz_charts::core::Path) -> Vec<(f64, f64)> {
    path.commands()
        .iter()
        .filter_map(|command| match *command {
            PathCommand::MoveTo { x, y } | PathCommand::CubicTo { x, y, .. } => Some((x, y)),
            _ => None,
        })
        .collect()
}

#[test]
fn constant_series_renders_a_flat_line_at_the_baseline() {
    let path = smooth_path(&[5.0, 5.0, 5.0, 5.0], 120.0, 40.0, 0.3, false);

    for command in path.commands() {
        match *command {
            PathCommand::MoveTo { y, .. } => assert_eq!(y, 40.0),
            PathCommand::CubicTo {
                ctrl1_y, ctrl2_y, y, ..
            } => {
                assert_eq!(ctrl1_y, 40.0);
                assert_eq!(ctrl2_y, 40.0);
                assert_eq!(y, 40.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

#[test]
fn short_series_yield_an_empty_path() {
    assert!(smooth_path(&[], 100.0, 50.0, 0.3, false).is_empty());
    assert!(smooth_path(&[1.0], 100.0, 50.0, 0.3, false).is_empty());
    assert_eq!(smooth_path(&[], 100.0, 50.0, 0.3, true).to_svg(), "");
}

#[test]
fn two_samples_degrade_to_an_exact_straight_segment() {
    let path = smooth_path(&[0.0, 10.0], 100.0, 50.0, 0.3, false);
    assert_eq!(path.len(), 2);

    match path.commands()[1] {
        PathCommand::CubicTo {
            ctrl1_x,
            ctrl1_y,
            ctrl2_x,
            ctrl2_y,
            x,
            y,
        } => {
            // Boundary points act as their own control points.
            assert_eq!((ctrl1_x, ctrl1_y), (0.0, 50.0));
            assert_eq!((ctrl2_x, ctrl2_y), (x, y));
            assert_eq!((x, y), (100.0, 0.0));
        }
        other => panic!("expected cubic, got {other:?}"),
    }
}

#[test]
fn zero_tension_collapses_controls_onto_the_anchors() {
    let path = smooth_path(&[1.0, 4.0, 2.0, 5.0], 90.0, 30.0, 0.0, false);
    let anchors = anchor_points(&path);

    let mut cubic_index = 0;
    for command in path.commands() {
        if let PathCommand::CubicTo {
            ctrl1_x,
            ctrl1_y,
            ctrl2_x,
            ctrl2_y,
            ..
        } = *command
        {
            assert_eq!((ctrl1_x, ctrl1_y), anchors[cubic_index]);
            assert_eq!((ctrl2_x, ctrl2_y), anchors[cubic_index + 1]);
            cubic_index += 1;
        }
    }
    assert_eq!(cubic_index, 3);
}

#[test]
fn baseline_closure_appends_a_fillable_bottom_edge() {
    let path = smooth_path(&[2.0, 8.0, 4.0], 60.0, 20.0, 0.3, true);
    let n = path.len();
    assert_eq!(path.commands()[n - 1], PathCommand::Close);
    assert_eq!(
        path.commands()[n - 2],
        PathCommand::LineTo { x: 0.0, y: 20.0 }
    );
    assert_eq!(
        path.commands()[n - 3],
        PathCommand::LineTo { x: 60.0, y: 20.0 }
    );
}

#[test]
fn identical_inputs_serialize_byte_identically() {
    let samples = [61.0, 58.0, 64.0, 72.0, 66.0, 69.0, 63.0];
    let first = smooth_path(&samples, 220.0, 64.0, 0.3, true).to_svg();
    let second = smooth_path(&samples, 220.0, 64.0, 0.3, true).to_svg();
    assert_eq!(first, second);
}
