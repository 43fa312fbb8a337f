use approx::assert_relative_eq;
use balanz_charts::api::{PulseMarker, RingStyle, SparklineStyle, ring_scene, sparkline_scene};
use balanz_charts::core::PathCommand;
use balanz_charts::render::{Color, FillStyle, GradientStop};

const HEART_RATE: [f64; 7] = [62.0, 68.0, 75.0, 71.0, 83.0, 77.0, 72.0];

#[test]
fn stroke_only_sparkline_is_a_single_path() {
    let style = SparklineStyle::new(220.0, 64.0);
    let paths = sparkline_scene(&HEART_RATE, &style, 1.0, 1.0);
    assert_eq!(paths.len(), 1);
    assert!(paths[0].stroke.is_some());
    assert!(paths[0].fill.is_none());
}

#[test]
fn fill_adds_a_closed_area_under_the_curve() {
    let style = SparklineStyle::new(220.0, 64.0).with_fill(FillStyle::Gradient(vec![
        GradientStop::new(0.0, Color::rgba(0.9, 0.3, 0.4, 0.5)),
        GradientStop::new(1.0, Color::rgba(0.9, 0.3, 0.4, 0.0)),
    ]));
    let paths = sparkline_scene(&HEART_RATE, &style, 1.0, 1.0);

    assert_eq!(paths.len(), 2);
    let area = &paths[0];
    assert!(area.fill.is_some());
    assert_eq!(
        *area.path.commands().last().expect("closure"),
        PathCommand::Close
    );
}

#[test]
fn zero_reveal_flattens_the_curve_onto_the_baseline() {
    let style = SparklineStyle::new(220.0, 64.0);
    let paths = sparkline_scene(&HEART_RATE, &style, 0.0, 1.0);

    for command in paths[0].path.commands() {
        match *command {
            PathCommand::MoveTo { y, .. } => assert_relative_eq!(y, 64.0, epsilon = 1e-9),
            PathCommand::CubicTo { y, .. } => assert_relative_eq!(y, 64.0, epsilon = 1e-9),
            _ => {}
        }
    }
}

#[test]
fn pulse_scales_the_marker_radius() {
    let style = SparklineStyle::new(220.0, 64.0)
        .with_marker(PulseMarker::new(5.0, Color::rgb(0.9, 0.3, 0.4)));

    let radius_at = |pulse: f64| -> f64 {
        let paths = sparkline_scene(&HEART_RATE, &style, 1.0, pulse);
        let marker = paths.last().expect("marker path");
        match marker.path.commands()[1] {
            PathCommand::ArcTo { radius_x, .. } => radius_x,
            other => panic!("expected marker arc, got {other:?}"),
        }
    };

    assert_relative_eq!(radius_at(0.0), 3.0, epsilon = 1e-9);
    assert_relative_eq!(radius_at(1.0), 5.0, epsilon = 1e-9);
}

#[test]
fn short_series_render_nothing() {
    let style = SparklineStyle::new(220.0, 64.0);
    assert!(sparkline_scene(&[], &style, 1.0, 1.0).is_empty());
    assert!(sparkline_scene(&[70.0], &style, 1.0, 1.0).is_empty());
}

#[test]
fn ring_gradient_switches_the_progress_band_to_a_filled_segment() {
    let stops = vec![
        GradientStop::new(0.0, Color::rgb(0.2, 0.7, 0.5)),
        GradientStop::new(1.0, Color::rgb(0.1, 0.5, 0.9)),
    ];
    let style = RingStyle::new(60.0, 60.0, 45.0).with_gradient(stops);
    let paths = ring_scene(&style, 0.6);

    assert_eq!(paths.len(), 2);
    assert!(paths[1].fill.is_some());
    assert!(paths[1].stroke.is_none());

    let plain = RingStyle::new(60.0, 60.0, 45.0);
    let paths = ring_scene(&plain, 0.6);
    assert!(paths[1].stroke.is_some());
}
