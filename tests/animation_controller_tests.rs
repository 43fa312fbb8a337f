use approx::assert_relative_eq;
use balanz_charts::animation::{
    AnimationController, DriverSpec, Easing, FrameClock, ManualFrameClock,
};

fn linear(target: f64, duration_ms: f64) -> DriverSpec {
    DriverSpec::new(target, duration_ms).with_easing(Easing::Linear)
}

#[test]
fn drivers_advance_independently_on_a_shared_clock() {
    let mut controller = AnimationController::new();
    controller
        .start_driver("arc", linear(1.0, 1_000.0))
        .expect("arc driver");
    controller
        .start_driver("needle", linear(1.0, 500.0).with_delay_ms(250.0))
        .expect("needle driver");

    let mut clock = ManualFrameClock::new();
    clock.advance(600.0);
    let elapsed = clock.elapsed_ms();

    let arc = controller.sample("arc", elapsed).expect("arc value");
    let needle = controller.sample("needle", elapsed).expect("needle value");
    assert_relative_eq!(arc, 0.6, epsilon = 1e-12);
    assert_relative_eq!(needle, 0.7, epsilon = 1e-12);
}

#[test]
fn sample_all_preserves_insertion_order() {
    let mut controller = AnimationController::new();
    controller
        .start_driver("track", linear(1.0, 100.0))
        .expect("track driver");
    controller
        .start_driver("sweep", linear(1.0, 100.0))
        .expect("sweep driver");
    controller
        .start_driver("label", linear(1.0, 100.0))
        .expect("label driver");

    let names: Vec<String> = controller
        .sample_all(50.0)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, ["track", "sweep", "label"]);
}

#[test]
fn unmount_stops_every_driver() {
    let mut controller = AnimationController::new();
    controller
        .start_driver("reveal", linear(1.0, 1_000.0))
        .expect("reveal driver");
    controller
        .start_driver("pulse", linear(1.0, 900.0))
        .expect("pulse driver");

    let frozen = controller.sample("reveal", 400.0).expect("mid value");
    controller.stop_all();

    assert_eq!(controller.sample("reveal", 900.0), Some(frozen));
    assert!(controller.driver("pulse").expect("pulse driver").is_stopped());
}

#[test]
fn unknown_names_are_reported_not_panicked() {
    let mut controller = AnimationController::new();
    assert_eq!(controller.sample("ghost", 10.0), None);
    assert!(!controller.stop("ghost"));
}

#[test]
fn restarting_a_name_replaces_the_driver() {
    let mut controller = AnimationController::new();
    controller
        .start_driver("progress", linear(0.5, 1_000.0))
        .expect("first driver");
    controller
        .start_driver("progress", linear(0.9, 1_000.0))
        .expect("second driver");

    assert_eq!(controller.len(), 1);
    let value = controller.sample("progress", 1_000.0).expect("value");
    assert_eq!(value, 0.9);
}

#[test]
fn rejects_invalid_specs_on_start() {
    let mut controller = AnimationController::new();
    assert!(controller.start_driver("bad", linear(1.0, 0.0)).is_err());
    assert!(controller.is_empty());
}
