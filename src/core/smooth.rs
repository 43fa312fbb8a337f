use ordered_float::OrderedFloat;

use crate::core::path::{Path, PathCommand};
use crate::core::types::Point;

/// Default blend factor between straight segments and rounded curvature.
pub const DEFAULT_TENSION: f64 = 0.3;

/// Fits a smooth curve through an ordered sample series in view space.
///
/// Samples map to `x = (i / (n-1)) * view_width` and values normalize
/// against the series min/max into `y = view_height - normalized *
/// view_height`. A flat series substitutes a range of 1, so it renders as a
/// flat line instead of dividing by zero.
///
/// With `close_to_baseline` the path drops to the bottom edge and returns to
/// the first point's x, producing a fillable area-under-curve shape.
///
/// Fewer than 2 samples yields `Path::empty()`: nothing to render, not an
/// error. Identical inputs always produce identical output.
#[must_use]
pub fn smooth_path(
    samples: &[f64],
    view_width: f64,
    view_height: f64,
    tension: f64,
    close_to_baseline: bool,
) -> Path {
    let points = normalize_samples(samples, view_width, view_height);
    let mut path = curve_through(&points, tension);
    if close_to_baseline && !path.is_empty() {
        append_baseline_closure(&mut path, points[0], points[points.len() - 1], view_height);
    }
    path
}

/// Maps raw samples into view-space points.
///
/// Exposed separately so scene builders can place markers (e.g. the latest
/// heart-rate dot) on the same coordinates the curve uses.
#[must_use]
pub fn normalize_samples(samples: &[f64], view_width: f64, view_height: f64) -> Vec<Point> {
    if samples.len() < 2 {
        return Vec::new();
    }

    let min = samples
        .iter()
        .copied()
        .map(OrderedFloat)
        .min()
        .map_or(0.0, |v| v.0);
    let max = samples
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |v| v.0);
    let range = if max == min { 1.0 } else { max - min };

    let last_index = (samples.len() - 1) as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, value)| Point {
            x: (i as f64 / last_index) * view_width,
            y: view_height - ((value - min) / range) * view_height,
        })
        .collect()
}

/// Open cubic chain through already-positioned points.
///
/// Smoothing is Catmull-Rom style: each interior point contributes control
/// offsets from the delta between its neighbors, scaled by `tension`
/// (clamped into `[0, 1]`); the first and last points act as their own
/// control points. Exactly 2 points therefore degrade to an exact straight
/// segment. Fewer than 2 points yields `Path::empty()`.
#[must_use]
pub fn curve_through(points: &[Point], tension: f64) -> Path {
    if points.len() < 2 {
        return Path::empty();
    }
    let tension = tension.clamp(0.0, 1.0);

    let mut path = Path::empty();
    path.push(PathCommand::MoveTo {
        x: points[0].x,
        y: points[0].y,
    });

    for i in 0..points.len() - 1 {
        let ctrl1 = control_offset(points, i, tension).map_or(points[i], |(dx, dy)| Point {
            x: points[i].x + dx,
            y: points[i].y + dy,
        });
        let next = i + 1;
        let ctrl2 = control_offset(points, next, tension).map_or(points[next], |(dx, dy)| Point {
            x: points[next].x - dx,
            y: points[next].y - dy,
        });
        path.push(PathCommand::CubicTo {
            ctrl1_x: ctrl1.x,
            ctrl1_y: ctrl1.y,
            ctrl2_x: ctrl2.x,
            ctrl2_y: ctrl2.y,
            x: points[next].x,
            y: points[next].y,
        });
    }

    path
}

/// Turns an open curve into a fillable area-under-curve shape.
///
/// Appends straight segments from `last` down to the baseline, back under
/// `first`, and closes.
pub fn append_baseline_closure(path: &mut Path, first: Point, last: Point, baseline_y: f64) {
    path.push(PathCommand::LineTo {
        x: last.x,
        y: baseline_y,
    });
    path.push(PathCommand::LineTo {
        x: first.x,
        y: baseline_y,
    });
    path.push(PathCommand::Close);
}

/// Neighbor-delta control offset for point `i`, `None` at the boundaries.
fn control_offset(points: &[Point], i: usize, tension: f64) -> Option<(f64, f64)> {
    if i == 0 || i + 1 >= points.len() {
        return None;
    }
    let prev = points[i - 1];
    let next = points[i + 1];
    Some(((next.x - prev.x) * tension, (next.y - prev.y) * tension))
}

#[cfg(test)]
mod tests {
    use super::normalize_samples;

    #[test]
    fn flat_series_substitutes_unit_range() {
        let points = normalize_samples(&[5.0, 5.0, 5.0], 100.0, 40.0);
        assert_eq!(points.len(), 3);
        for point in points {
            assert!((point.y - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn endpoints_span_the_view_width() {
        let points = normalize_samples(&[1.0, 3.0, 2.0], 90.0, 40.0);
        assert!((points[0].x - 0.0).abs() < 1e-9);
        assert!((points[2].x - 90.0).abs() < 1e-9);
    }
}
