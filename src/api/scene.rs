use tracing::trace;

use crate::api::widget_style::{GaugeStyle, RingStyle, SparklineStyle};
use crate::core::{
    ArcSpec, Path, PathCommand, Point, append_baseline_closure, arc_path, circle_path,
    curve_through, gauge_tick_lines, normalize_samples, normalized_sweep_deg, point_on_circle,
    ring_segment_path, scale_label_angles,
};
use crate::render::{FillStyle, LabelAnchor, LabelPrimitive, PathPrimitive, TickPrimitive};

/// Primitive groups produced for one gauge widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GaugeScene {
    pub paths: Vec<PathPrimitive>,
    pub ticks: Vec<TickPrimitive>,
    pub labels: Vec<LabelPrimitive>,
}

/// Builds the track and progress band of a circular progress ring.
///
/// `fraction` is the animated progress in `[0, 1]`; out-of-range samples
/// clamp. With a gradient configured the progress band becomes a filled ring
/// segment spanning the stroke width, otherwise a stroked arc.
#[must_use]
pub fn ring_scene(style: &RingStyle, fraction: f64) -> Vec<PathPrimitive> {
    let fraction = fraction.clamp(0.0, 1.0);
    let full_sweep = normalized_sweep_deg(0.0, style.full_sweep_deg);
    let track_end = style.start_angle_deg + full_sweep;

    let mut paths = Vec::with_capacity(2);
    paths.push(PathPrimitive::stroked(
        arc_path(&ArcSpec::simple(
            style.center_x,
            style.center_y,
            style.radius,
            style.start_angle_deg,
            track_end,
        )),
        style.stroke_width,
        style.track_color,
    ));

    if fraction > 0.0 {
        let progress_end = style.start_angle_deg + fraction * full_sweep;
        let primitive = match &style.gradient {
            Some(stops) => {
                let half_stroke = style.stroke_width / 2.0;
                PathPrimitive::filled(
                    ring_segment_path(&ArcSpec::new(
                        style.center_x,
                        style.center_y,
                        (style.radius - half_stroke).max(0.0),
                        style.radius + half_stroke,
                        style.start_angle_deg,
                        progress_end,
                    )),
                    FillStyle::Gradient(stops.clone()),
                )
            }
            None => PathPrimitive::stroked(
                arc_path(&ArcSpec::simple(
                    style.center_x,
                    style.center_y,
                    style.radius,
                    style.start_angle_deg,
                    progress_end,
                )),
                style.stroke_width,
                style.progress_color,
            ),
        };
        paths.push(primitive);
    }

    trace!(fraction, paths = paths.len(), "built ring scene");
    paths
}

/// Builds a scale gauge: track, active sweep, tick band, labels, needle.
///
/// `labels` supplies the scale texts outward of the outer radius; fewer than
/// 2 labels have no defined placement and are skipped. The needle (when the
/// style carries one) points at the animated fraction.
#[must_use]
pub fn gauge_scene(style: &GaugeStyle, fraction: f64, labels: &[String]) -> GaugeScene {
    let fraction = fraction.clamp(0.0, 1.0);
    let sweep = normalized_sweep_deg(0.0, style.sweep_deg);
    let mut scene = GaugeScene::default();

    scene.paths.push(PathPrimitive::stroked(
        arc_path(&ArcSpec::simple(
            style.center_x,
            style.center_y,
            style.outer_radius,
            style.start_angle_deg,
            style.start_angle_deg + sweep,
        )),
        style.track_stroke_width,
        style.track_color,
    ));

    if fraction > 0.0 {
        scene.paths.push(PathPrimitive::stroked(
            arc_path(&ArcSpec::simple(
                style.center_x,
                style.center_y,
                style.outer_radius,
                style.start_angle_deg,
                style.start_angle_deg + fraction * sweep,
            )),
            style.track_stroke_width,
            style.active_color,
        ));
    }

    let tick_band = ArcSpec::new(
        style.center_x,
        style.center_y,
        style.inner_radius,
        style.outer_radius,
        style.start_angle_deg,
        style.start_angle_deg + sweep,
    );
    for tick in gauge_tick_lines(&tick_band, style.tick_count, style.major_tick_period()) {
        let stroke_width = if tick.is_major {
            style.tick_stroke_width * 2.0
        } else {
            style.tick_stroke_width
        };
        scene.ticks.push(TickPrimitive::new(
            tick.inner.x,
            tick.inner.y,
            tick.outer.x,
            tick.outer.y,
            stroke_width,
            style.tick_color,
        ));
    }

    let label_count = (style.label_count as usize).min(labels.len()) as u32;
    let label_radius = style.outer_radius + style.label_offset;
    for (text, angle) in labels
        .iter()
        .zip(scale_label_angles(style.start_angle_deg, sweep, label_count))
    {
        let position = point_on_circle(style.center_x, style.center_y, label_radius, angle);
        scene.labels.push(LabelPrimitive::new(
            text.clone(),
            position.x,
            position.y,
            style.label_font_size_px,
            style.label_color,
            LabelAnchor::Middle,
        ));
    }

    if let Some(needle_length) = style.needle_length {
        let angle = style.start_angle_deg + fraction * sweep;
        let tip = point_on_circle(style.center_x, style.center_y, needle_length, angle);
        let mut needle = Path::empty();
        needle.push(PathCommand::MoveTo {
            x: style.center_x,
            y: style.center_y,
        });
        needle.push(PathCommand::LineTo { x: tip.x, y: tip.y });
        scene.paths.push(PathPrimitive::stroked(
            needle,
            style.tick_stroke_width * 2.0,
            style.active_color,
        ));
    }

    trace!(
        fraction,
        ticks = scene.ticks.len(),
        labels = scene.labels.len(),
        "built gauge scene"
    );
    scene
}

/// Builds a smoothed sample trace with optional area fill and pulse marker.
///
/// `reveal` animates the curve growing out of its baseline (0 = flat,
/// 1 = final shape); `pulse` drives the marker's breathing scale. Fewer than
/// 2 samples renders nothing.
#[must_use]
pub fn sparkline_scene(
    samples: &[f64],
    style: &SparklineStyle,
    reveal: f64,
    pulse: f64,
) -> Vec<PathPrimitive> {
    let mut points = normalize_samples(samples, style.width, style.height);
    if points.len() < 2 {
        return Vec::new();
    }

    let reveal = reveal.clamp(0.0, 1.0);
    if reveal < 1.0 {
        for point in &mut points {
            point.y = style.height - (style.height - point.y) * reveal;
        }
    }

    let mut paths = Vec::with_capacity(3);

    if let Some(fill) = &style.fill {
        let mut area = curve_through(&points, style.tension);
        append_baseline_closure(&mut area, points[0], points[points.len() - 1], style.height);
        paths.push(PathPrimitive::filled(area, fill.clone()));
    }

    paths.push(PathPrimitive::stroked(
        curve_through(&points, style.tension),
        style.stroke_width,
        style.line_color,
    ));

    if let Some(marker) = &style.marker {
        let tip: Point = points[points.len() - 1];
        let scale = 0.6 + 0.4 * pulse.clamp(0.0, 1.0);
        paths.push(PathPrimitive::filled(
            circle_path(tip.x, tip.y, marker.radius * scale),
            FillStyle::Solid(marker.color),
        ));
    }

    trace!(
        samples = samples.len(),
        reveal,
        paths = paths.len(),
        "built sparkline scene"
    );
    paths
}
