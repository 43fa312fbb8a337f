use crate::core::path::{Path, PathCommand};
use crate::core::polar::point_on_circle;
use crate::core::types::Point;
use crate::error::{WidgetError, WidgetResult};

pub const FULL_TURN_DEG: f64 = 360.0;

/// Largest sweep the builders will draw.
///
/// SVG arcs cannot express a full turn between two coincident endpoints, so
/// requested sweeps at or past 360 degrees clamp to just under one.
pub const MAX_SWEEP_DEG: f64 = FULL_TURN_DEG - 1e-3;

const HALF_TURN_DEG: f64 = 180.0;

/// Geometry inputs for one arc or ring segment, in pixel space.
///
/// Angles follow the dial convention (0 = up, clockwise). The builders never
/// fail: a spec that violates `validate` produces a degenerate path rather
/// than an error, so `validate` is for callers that want early diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

impl ArcSpec {
    #[must_use]
    pub fn new(
        center_x: f64,
        center_y: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle_deg: f64,
        end_angle_deg: f64,
    ) -> Self {
        Self {
            center_x,
            center_y,
            inner_radius,
            outer_radius,
            start_angle_deg,
            end_angle_deg,
        }
    }

    /// Simple arc along a single radius, no ring interior.
    #[must_use]
    pub fn simple(
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_angle_deg: f64,
        end_angle_deg: f64,
    ) -> Self {
        Self::new(center_x, center_y, 0.0, radius, start_angle_deg, end_angle_deg)
    }

    pub fn validate(&self) -> WidgetResult<()> {
        for (field, value) in [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("inner_radius", self.inner_radius),
            ("outer_radius", self.outer_radius),
            ("start_angle_deg", self.start_angle_deg),
            ("end_angle_deg", self.end_angle_deg),
        ] {
            if !value.is_finite() {
                return Err(WidgetError::InvalidData(format!(
                    "arc field `{field}` must be finite"
                )));
            }
        }
        if self.inner_radius < 0.0 || self.inner_radius > self.outer_radius {
            return Err(WidgetError::InvalidData(format!(
                "arc radii must satisfy 0 <= inner <= outer, got inner={}, outer={}",
                self.inner_radius, self.outer_radius
            )));
        }
        Ok(())
    }

    /// Normalized angular span of this spec, in `[0, MAX_SWEEP_DEG]`.
    #[must_use]
    pub fn sweep_deg(&self) -> f64 {
        normalized_sweep_deg(self.start_angle_deg, self.end_angle_deg)
    }
}

/// Normalizes a raw sweep into the drawable domain.
///
/// Wrapped ranges (`end < start`, or past 360) reduce by euclidean
/// remainder; sweeps of a full turn or more clamp to `MAX_SWEEP_DEG` so a
/// gauge asked to show "more than full" renders full instead of collapsing
/// to an empty arc.
#[must_use]
pub fn normalized_sweep_deg(start_angle_deg: f64, end_angle_deg: f64) -> f64 {
    let raw = end_angle_deg - start_angle_deg;
    if !raw.is_finite() {
        return 0.0;
    }
    if raw >= FULL_TURN_DEG {
        return MAX_SWEEP_DEG;
    }
    raw.rem_euclid(FULL_TURN_DEG)
}

fn large_arc(sweep_deg: f64) -> bool {
    sweep_deg > HALF_TURN_DEG
}

/// Builds the path for one arc.
///
/// With `inner_radius <= 0` this is an open stroke along the outer radius;
/// otherwise it is the closed ring segment. Both trace the outer boundary
/// with identical commands.
#[must_use]
pub fn arc_path(spec: &ArcSpec) -> Path {
    if spec.inner_radius > 0.0 {
        return ring_segment_path(spec);
    }

    let sweep = spec.sweep_deg();
    let end_angle = spec.start_angle_deg + sweep;
    let start = point_on_circle(spec.center_x, spec.center_y, spec.outer_radius, spec.start_angle_deg);
    let end = point_on_circle(spec.center_x, spec.center_y, spec.outer_radius, end_angle);

    let mut path = Path::empty();
    path.push(PathCommand::MoveTo {
        x: start.x,
        y: start.y,
    });
    path.push(PathCommand::ArcTo {
        radius_x: spec.outer_radius,
        radius_y: spec.outer_radius,
        rotation_deg: 0.0,
        large_arc: large_arc(sweep),
        sweep_clockwise: true,
        x: end.x,
        y: end.y,
    });
    path
}

/// Builds the closed, fillable donut-slice path for a ring segment.
///
/// Outer boundary clockwise, straight join, inner boundary traced back
/// counter-clockwise, closed. An `inner_radius > outer_radius` spec yields a
/// self-intersecting path; that is a documented limitation, not an error.
#[must_use]
pub fn ring_segment_path(spec: &ArcSpec) -> Path {
    let sweep = spec.sweep_deg();
    let end_angle = spec.start_angle_deg + sweep;
    let flag = large_arc(sweep);

    let outer_start = point_on_circle(
        spec.center_x,
        spec.center_y,
        spec.outer_radius,
        spec.start_angle_deg,
    );
    let outer_end = point_on_circle(spec.center_x, spec.center_y, spec.outer_radius, end_angle);
    let inner_start = point_on_circle(
        spec.center_x,
        spec.center_y,
        spec.inner_radius,
        spec.start_angle_deg,
    );
    let inner_end = point_on_circle(spec.center_x, spec.center_y, spec.inner_radius, end_angle);

    let mut path = Path::empty();
    path.push(PathCommand::MoveTo {
        x: outer_start.x,
        y: outer_start.y,
    });
    path.push(PathCommand::ArcTo {
        radius_x: spec.outer_radius,
        radius_y: spec.outer_radius,
        rotation_deg: 0.0,
        large_arc: flag,
        sweep_clockwise: true,
        x: outer_end.x,
        y: outer_end.y,
    });
    path.push(PathCommand::LineTo {
        x: inner_end.x,
        y: inner_end.y,
    });
    path.push(PathCommand::ArcTo {
        radius_x: spec.inner_radius,
        radius_y: spec.inner_radius,
        rotation_deg: 0.0,
        large_arc: flag,
        sweep_clockwise: false,
        x: inner_start.x,
        y: inner_start.y,
    });
    path.push(PathCommand::Close);
    path
}

/// Builds a full circle as two half-turn arcs.
///
/// SVG arcs cannot connect coincident endpoints, so the circle is split at
/// the top and bottom of the dial.
#[must_use]
pub fn circle_path(center_x: f64, center_y: f64, radius: f64) -> Path {
    let top = point_on_circle(center_x, center_y, radius, 0.0);
    let bottom = point_on_circle(center_x, center_y, radius, HALF_TURN_DEG);

    let mut path = Path::empty();
    path.push(PathCommand::MoveTo { x: top.x, y: top.y });
    for target in [bottom, top] {
        path.push(PathCommand::ArcTo {
            radius_x: radius,
            radius_y: radius,
            rotation_deg: 0.0,
            large_arc: false,
            sweep_clockwise: true,
            x: target.x,
            y: target.y,
        });
    }
    path.push(PathCommand::Close);
    path
}

/// One radial tick stroke between the spec's inner and outer radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickLine {
    pub inner: Point,
    pub outer: Point,
    pub is_major: bool,
}

/// Computes radial tick lines evenly spaced across the spec's sweep.
///
/// Both sweep endpoints carry a tick (`tick_count + 1` lines); on a full
/// turn the last tick coincides with the first. Every `major_every`-th tick
/// is flagged major, starting from the first.
#[must_use]
pub fn gauge_tick_lines(spec: &ArcSpec, tick_count: u32, major_every: u32) -> Vec<TickLine> {
    if tick_count == 0 {
        return Vec::new();
    }
    let major_every = major_every.max(1);
    let sweep = spec.sweep_deg();

    let mut ticks = Vec::with_capacity(tick_count as usize + 1);
    for i in 0..=tick_count {
        let angle = spec.start_angle_deg + (f64::from(i) / f64::from(tick_count)) * sweep;
        ticks.push(TickLine {
            inner: point_on_circle(spec.center_x, spec.center_y, spec.inner_radius, angle),
            outer: point_on_circle(spec.center_x, spec.center_y, spec.outer_radius, angle),
            is_major: i % major_every == 0,
        });
    }
    ticks
}

/// Angles for `label_count` scale labels spread across a sweep.
///
/// The first label sits at the start angle and the last at the end angle.
/// Fewer than 2 labels has no defined placement; the caller guard is an
/// empty result, not an error.
#[must_use]
pub fn scale_label_angles(start_angle_deg: f64, sweep_deg: f64, label_count: u32) -> Vec<f64> {
    if label_count < 2 {
        return Vec::new();
    }
    (0..label_count)
        .map(|k| start_angle_deg + (f64::from(k) / f64::from(label_count - 1)) * sweep_deg)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{MAX_SWEEP_DEG, normalized_sweep_deg};

    #[test]
    fn wrapped_sweep_normalizes_into_full_turn() {
        assert!((normalized_sweep_deg(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((normalized_sweep_deg(0.0, -90.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn overfull_sweep_clamps_to_near_full_turn() {
        assert_eq!(normalized_sweep_deg(0.0, 360.0), MAX_SWEEP_DEG);
        assert_eq!(normalized_sweep_deg(0.0, 1080.0), MAX_SWEEP_DEG);
    }
}
