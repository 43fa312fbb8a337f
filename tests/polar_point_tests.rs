use approx::assert_relative_eq;
use balanz_charts::core::{Point, point_on_circle};

#[test]
fn zero_angle_points_straight_up() {
    let p = point_on_circle(50.0, 50.0, 20.0, 0.0);
    assert_relative_eq!(p.x, 50.0, epsilon = 1e-9);
    assert_relative_eq!(p.y, 30.0, epsilon = 1e-9);
}

#[test]
fn cardinal_angles_map_clockwise() {
    let right = point_on_circle(0.0, 0.0, 10.0, 90.0);
    assert_relative_eq!(right.x, 10.0, epsilon = 1e-9);
    assert_relative_eq!(right.y, 0.0, epsilon = 1e-9);

    let down = point_on_circle(0.0, 0.0, 10.0, 180.0);
    assert_relative_eq!(down.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(down.y, 10.0, epsilon = 1e-9);

    let left = point_on_circle(0.0, 0.0, 10.0, 270.0);
    assert_relative_eq!(left.x, -10.0, epsilon = 1e-9);
    assert_relative_eq!(left.y, 0.0, epsilon = 1e-9);
}

#[test]
fn points_lie_on_the_circle() {
    let center = Point::new(120.0, 80.0);
    let radius = 42.5;
    for step in 0..48 {
        let angle = f64::from(step) * 7.5;
        let p = point_on_circle(center.x, center.y, radius, angle);
        assert_relative_eq!(p.distance_to(center), radius, epsilon = 1e-9);
    }
}

#[test]
fn angles_wrap_every_full_turn() {
    let a = point_on_circle(10.0, 10.0, 5.0, 45.0);
    let b = point_on_circle(10.0, 10.0, 5.0, 405.0);
    assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
}
