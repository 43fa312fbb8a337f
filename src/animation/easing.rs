use serde::{Deserialize, Serialize};

/// Easing curve identifiers accepted on the animation config surface.
///
/// Every curve is a monotonic map of `[0, 1]` onto itself with exact
/// endpoints, so drivers reach their targets without overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    EaseOutCubic,
}

impl Easing {
    /// Remaps a linear progress fraction. Inputs are clamped into `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseOutCubic,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 0..=100 {
                let value = easing.apply(f64::from(step) / 100.0);
                assert!(value >= last, "{easing:?} dipped at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn out_of_range_input_clamps() {
        assert_eq!(Easing::EaseOut.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOut.apply(1.5), 1.0);
    }
}
