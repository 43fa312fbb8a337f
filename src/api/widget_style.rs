use serde::{Deserialize, Serialize};

use crate::animation::{DriverSpec, Easing, RepeatPolicy};
use crate::core::DEFAULT_TENSION;
use crate::error::{WidgetError, WidgetResult};
use crate::render::{Color, FillStyle, GradientStop};

/// Animation timing consumed from widget callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTiming {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub repeat: RepeatPolicy,
}

impl AnimationTiming {
    #[must_use]
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::default(),
            repeat: RepeatPolicy::default(),
        }
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

    /// Driver spec animating 0 to `target` under this timing.
    #[must_use]
    pub fn driver_spec(&self, target: f64) -> DriverSpec {
        DriverSpec::new(target, self.duration_ms)
            .with_delay_ms(self.delay_ms)
            .with_easing(self.easing)
            .with_repeat(self.repeat)
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self::new(default_duration_ms())
    }
}

/// Style for a circular progress ring (steps, calories, water, exercise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingStyle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    #[serde(default = "default_ring_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub start_angle_deg: f64,
    #[serde(default = "default_full_sweep_deg")]
    pub full_sweep_deg: f64,
    #[serde(default = "default_track_color")]
    pub track_color: Color,
    #[serde(default = "default_progress_color")]
    pub progress_color: Color,
    /// Cosmetic gradient for the progress band; switches the band from a
    /// stroked arc to a filled ring segment.
    #[serde(default)]
    pub gradient: Option<Vec<GradientStop>>,
}

impl RingStyle {
    #[must_use]
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            stroke_width: default_ring_stroke_width(),
            start_angle_deg: 0.0,
            full_sweep_deg: default_full_sweep_deg(),
            track_color: default_track_color(),
            progress_color: default_progress_color(),
            gradient: None,
        }
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_sweep(mut self, start_angle_deg: f64, full_sweep_deg: f64) -> Self {
        self.start_angle_deg = start_angle_deg;
        self.full_sweep_deg = full_sweep_deg;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, track_color: Color, progress_color: Color) -> Self {
        self.track_color = track_color;
        self.progress_color = progress_color;
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, stops: Vec<GradientStop>) -> Self {
        self.gradient = Some(stops);
        self
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(WidgetError::InvalidConfig(format!(
                "ring radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "ring stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.track_color.validate()?;
        self.progress_color.validate()?;
        if let Some(stops) = &self.gradient {
            FillStyle::Gradient(stops.clone()).validate()?;
        }
        Ok(())
    }
}

/// Style for a scale gauge with ticks, labels and a needle (sleep, cycling).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeStyle {
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    #[serde(default = "default_gauge_start_angle_deg")]
    pub start_angle_deg: f64,
    #[serde(default = "default_gauge_sweep_deg")]
    pub sweep_deg: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: u32,
    /// Major-tick period; `None` falls back to a quarter of `tick_count`.
    #[serde(default)]
    pub major_tick_every: Option<u32>,
    #[serde(default)]
    pub label_count: u32,
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    /// Needle length from the center; `None` draws no needle.
    #[serde(default)]
    pub needle_length: Option<f64>,
    #[serde(default = "default_tick_stroke_width")]
    pub tick_stroke_width: f64,
    #[serde(default = "default_track_stroke_width")]
    pub track_stroke_width: f64,
    #[serde(default = "default_track_color")]
    pub track_color: Color,
    #[serde(default = "default_progress_color")]
    pub active_color: Color,
    #[serde(default = "default_tick_color")]
    pub tick_color: Color,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
}

impl GaugeStyle {
    #[must_use]
    pub fn new(center_x: f64, center_y: f64, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            inner_radius,
            outer_radius,
            start_angle_deg: default_gauge_start_angle_deg(),
            sweep_deg: default_gauge_sweep_deg(),
            tick_count: default_tick_count(),
            major_tick_every: None,
            label_count: 0,
            label_offset: default_label_offset(),
            label_font_size_px: default_label_font_size_px(),
            needle_length: None,
            tick_stroke_width: default_tick_stroke_width(),
            track_stroke_width: default_track_stroke_width(),
            track_color: default_track_color(),
            active_color: default_progress_color(),
            tick_color: default_tick_color(),
            label_color: default_label_color(),
        }
    }

    #[must_use]
    pub fn with_sweep(mut self, start_angle_deg: f64, sweep_deg: f64) -> Self {
        self.start_angle_deg = start_angle_deg;
        self.sweep_deg = sweep_deg;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, tick_count: u32, major_tick_every: Option<u32>) -> Self {
        self.tick_count = tick_count;
        self.major_tick_every = major_tick_every;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, label_count: u32, label_offset: f64) -> Self {
        self.label_count = label_count;
        self.label_offset = label_offset;
        self
    }

    #[must_use]
    pub fn with_needle(mut self, needle_length: f64) -> Self {
        self.needle_length = Some(needle_length);
        self
    }

    /// Effective major-tick period: the caller's divisor or `tick_count / 4`.
    #[must_use]
    pub fn major_tick_period(&self) -> u32 {
        self.major_tick_every
            .unwrap_or(self.tick_count / 4)
            .max(1)
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if !self.inner_radius.is_finite()
            || !self.outer_radius.is_finite()
            || self.inner_radius < 0.0
            || self.inner_radius > self.outer_radius
        {
            return Err(WidgetError::InvalidConfig(format!(
                "gauge radii must satisfy 0 <= inner <= outer, got inner={}, outer={}",
                self.inner_radius, self.outer_radius
            )));
        }
        if let Some(needle_length) = self.needle_length {
            if !needle_length.is_finite() || needle_length <= 0.0 {
                return Err(WidgetError::InvalidConfig(format!(
                    "gauge needle length must be finite and > 0, got {needle_length}"
                )));
            }
        }
        self.track_color.validate()?;
        self.active_color.validate()?;
        self.tick_color.validate()?;
        self.label_color.validate()
    }
}

/// Pulsing marker drawn on the newest sample of a sparkline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseMarker {
    pub radius: f64,
    pub color: Color,
    #[serde(default = "default_pulse_period_ms")]
    pub period_ms: f64,
}

impl PulseMarker {
    #[must_use]
    pub fn new(radius: f64, color: Color) -> Self {
        Self {
            radius,
            color,
            period_ms: default_pulse_period_ms(),
        }
    }
}

/// Style for a smoothed time-series trace (heart rate, weekly minutes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineStyle {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_tension")]
    pub tension: f64,
    #[serde(default = "default_line_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_progress_color")]
    pub line_color: Color,
    /// Area fill under the curve; enables the close-to-baseline path.
    #[serde(default)]
    pub fill: Option<FillStyle>,
    #[serde(default)]
    pub marker: Option<PulseMarker>,
}

impl SparklineStyle {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            tension: default_tension(),
            stroke_width: default_line_stroke_width(),
            line_color: default_progress_color(),
            fill: None,
            marker: None,
        }
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: PulseMarker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(WidgetError::InvalidConfig(format!(
                "sparkline view must be finite and positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.tension.is_finite() || !(0.0..=1.0).contains(&self.tension) {
            return Err(WidgetError::InvalidConfig(format!(
                "sparkline tension must be in [0, 1], got {}",
                self.tension
            )));
        }
        self.line_color.validate()?;
        if let Some(fill) = &self.fill {
            fill.validate()?;
        }
        if let Some(marker) = &self.marker {
            marker.color.validate()?;
        }
        Ok(())
    }
}

fn default_duration_ms() -> f64 {
    1_200.0
}

fn default_ring_stroke_width() -> f64 {
    10.0
}

fn default_full_sweep_deg() -> f64 {
    360.0
}

fn default_gauge_start_angle_deg() -> f64 {
    -135.0
}

fn default_gauge_sweep_deg() -> f64 {
    270.0
}

fn default_tick_count() -> u32 {
    20
}

fn default_label_offset() -> f64 {
    14.0
}

fn default_label_font_size_px() -> f64 {
    11.0
}

fn default_tick_stroke_width() -> f64 {
    1.5
}

fn default_track_stroke_width() -> f64 {
    6.0
}

fn default_line_stroke_width() -> f64 {
    2.5
}

fn default_tension() -> f64 {
    DEFAULT_TENSION
}

fn default_pulse_period_ms() -> f64 {
    900.0
}

fn default_track_color() -> Color {
    Color::rgba(0.92, 0.93, 0.95, 1.0)
}

fn default_progress_color() -> Color {
    Color::rgb(0.30, 0.56, 0.89)
}

fn default_tick_color() -> Color {
    Color::rgba(0.62, 0.65, 0.70, 1.0)
}

fn default_label_color() -> Color {
    Color::rgba(0.38, 0.42, 0.48, 1.0)
}
