use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::animation::easing::Easing;
use crate::error::{WidgetError, WidgetResult};

/// What a driver does once elapsed time passes its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatPolicy {
    /// Clamp at the target; further sampling is idempotent.
    #[default]
    None,
    /// Wrap to the start and run forward again, forever (wheel spin).
    LoopForward,
    /// Ping-pong between start and target, forever (pulse indicator).
    LoopMirror,
}

/// Declarative animation parameters for one driver instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverSpec {
    #[serde(default)]
    pub start_value: f64,
    pub target_value: f64,
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub repeat: RepeatPolicy,
}

impl DriverSpec {
    /// Creates a spec animating 0 to `target_value` over `duration_ms`.
    #[must_use]
    pub fn new(target_value: f64, duration_ms: f64) -> Self {
        Self {
            start_value: 0.0,
            target_value,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::default(),
            repeat: RepeatPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_start_value(mut self, start_value: f64) -> Self {
        self.start_value = start_value;
        self
    }

    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatPolicy) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if !self.start_value.is_finite() || !self.target_value.is_finite() {
            return Err(WidgetError::InvalidConfig(
                "driver values must be finite".to_owned(),
            ));
        }
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(WidgetError::InvalidConfig(format!(
                "driver duration must be finite and > 0, got {}",
                self.duration_ms
            )));
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(WidgetError::InvalidConfig(format!(
                "driver delay must be finite and >= 0, got {}",
                self.delay_ms
            )));
        }
        Ok(())
    }
}

/// Frame-driven scalar interpolator for one animated property.
///
/// Drivers carry no clock of their own; the owning widget samples them with
/// elapsed wall-clock milliseconds from a shared frame source. Each driver
/// is exclusively owned and must be stopped when its owner unmounts.
#[derive(Debug, Clone)]
pub struct ProgressDriver {
    spec: DriverSpec,
    last_value: f64,
    stopped: bool,
}

impl ProgressDriver {
    pub fn new(spec: DriverSpec) -> WidgetResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            last_value: spec.start_value,
            stopped: false,
        })
    }

    #[must_use]
    pub fn spec(&self) -> DriverSpec {
        self.spec
    }

    /// Last sampled value; the frozen value after `stop`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.last_value
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// True once a non-repeating driver has reached its target.
    #[must_use]
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.spec.repeat == RepeatPolicy::None
            && elapsed_ms >= self.spec.delay_ms + self.spec.duration_ms
    }

    /// Freezes the driver at its last sampled value.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Samples the driver at `elapsed_ms` since its owner mounted.
    ///
    /// Callers must not sample a stopped driver; doing so returns the frozen
    /// value so stale frame callbacks stay harmless.
    pub fn sample(&mut self, elapsed_ms: f64) -> f64 {
        if self.stopped {
            warn!(elapsed_ms, "sampled a stopped animation driver");
            return self.last_value;
        }
        self.last_value = self.value_at(elapsed_ms);
        self.last_value
    }

    fn value_at(&self, elapsed_ms: f64) -> f64 {
        let spec = &self.spec;
        let active_ms = if elapsed_ms.is_finite() {
            elapsed_ms - spec.delay_ms
        } else {
            0.0
        };
        if active_ms <= 0.0 {
            return spec.start_value;
        }

        let phase = active_ms / spec.duration_ms;
        let fraction = match spec.repeat {
            RepeatPolicy::None => {
                if phase >= 1.0 {
                    // Exact target, independent of easing rounding.
                    return spec.target_value;
                }
                phase
            }
            RepeatPolicy::LoopForward => phase.fract(),
            RepeatPolicy::LoopMirror => {
                let cycle = phase.rem_euclid(2.0);
                if cycle <= 1.0 { cycle } else { 2.0 - cycle }
            }
        };

        let eased = spec.easing.apply(fraction);
        spec.start_value + (spec.target_value - spec.start_value) * eased
    }
}
