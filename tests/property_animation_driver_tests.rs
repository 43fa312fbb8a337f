use balanz_charts::animation::{DriverSpec, Easing, ProgressDriver};
use proptest::prelude::*;

fn any_easing() -> impl Strategy<Value = Easing> {
    prop_oneof![
        Just(Easing::Linear),
        Just(Easing::EaseIn),
        Just(Easing::EaseOut),
        Just(Easing::EaseInOut),
        Just(Easing::EaseOutCubic),
    ]
}

proptest! {
    #[test]
    fn non_repeating_drivers_are_monotonic_and_bounded(
        target in 0.01f64..1.0,
        duration in 16.0f64..5_000.0,
        delay in 0.0f64..500.0,
        easing in any_easing()
    ) {
        let spec = DriverSpec::new(target, duration)
            .with_delay_ms(delay)
            .with_easing(easing);
        let mut driver = ProgressDriver::new(spec).expect("valid spec");

        let mut last = f64::NEG_INFINITY;
        let horizon = delay + duration * 2.0;
        for step in 0..=64 {
            let elapsed = horizon * f64::from(step) / 64.0;
            let value = driver.sample(elapsed);
            prop_assert!(value >= last - 1e-12);
            prop_assert!((0.0..=target + 1e-12).contains(&value));
            last = value;
        }

        prop_assert_eq!(driver.sample(delay + duration * 2.0), target);
    }

    #[test]
    fn samples_before_the_delay_hold_the_start(
        start in -1.0f64..1.0,
        target in -1.0f64..1.0,
        duration in 1.0f64..1_000.0,
        delay in 1.0f64..1_000.0
    ) {
        let spec = DriverSpec::new(target, duration)
            .with_start_value(start)
            .with_delay_ms(delay);
        let mut driver = ProgressDriver::new(spec).expect("valid spec");
        prop_assert_eq!(driver.sample(delay * 0.99), start);
    }
}
