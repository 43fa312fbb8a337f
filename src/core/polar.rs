use crate::core::types::Point;

/// Maps a gauge angle onto a circle in pixel space.
///
/// Widget angles follow the dial convention: 0 degrees points straight up
/// and angles grow clockwise. Screen math wants radians measured from the
/// positive x axis, hence the fixed -90 degree rotation.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output. Rounding is left to
/// final path serialization.
#[must_use]
pub fn point_on_circle(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> Point {
    let angle_rad = (angle_deg - 90.0).to_radians();
    Point {
        x: center_x + radius * angle_rad.cos(),
        y: center_y + radius * angle_rad.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::point_on_circle;

    #[test]
    fn zero_degrees_points_straight_up() {
        let p = point_on_circle(100.0, 100.0, 40.0, 0.0);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn ninety_degrees_points_right() {
        let p = point_on_circle(100.0, 100.0, 40.0, 90.0);
        assert!((p.x - 140.0).abs() < 1e-9);
        assert!((p.y - 100.0).abs() < 1e-9);
    }
}
