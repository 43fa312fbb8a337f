use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::animation::{AnimationController, DriverSpec, Easing, RepeatPolicy};
use crate::api::engine_config::WidgetEngineConfig;
use crate::api::progress::progress_fraction;
use crate::api::scene::{gauge_scene, ring_scene, sparkline_scene};
use crate::api::widget_style::{AnimationTiming, GaugeStyle, RingStyle, SparklineStyle};
use crate::error::{WidgetError, WidgetResult};
use crate::render::{RenderFrame, Renderer};

const PROGRESS_DRIVER: &str = "progress";
const REVEAL_DRIVER: &str = "reveal";
const PULSE_DRIVER: &str = "pulse";

/// Declarative description of one dashboard card.
///
/// The engine owns the animation drivers; the spec only carries the style,
/// the data, and optionally its own timing (falling back to the engine
/// config's default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WidgetSpec {
    /// Circular progress ring: steps, calories, water, exercise.
    Ring {
        style: RingStyle,
        current: f64,
        goal: f64,
        #[serde(default)]
        timing: Option<AnimationTiming>,
    },
    /// Scale gauge with ticks, labels and needle: sleep score, cycling speed.
    Gauge {
        style: GaugeStyle,
        fraction: f64,
        #[serde(default)]
        labels: Vec<String>,
        #[serde(default)]
        timing: Option<AnimationTiming>,
    },
    /// Smoothed sample trace: heart rate, weekly exercise minutes.
    Sparkline {
        style: SparklineStyle,
        samples: Vec<f64>,
        #[serde(default)]
        timing: Option<AnimationTiming>,
    },
}

impl WidgetSpec {
    pub fn validate(&self) -> WidgetResult<()> {
        match self {
            Self::Ring { style, .. } => style.validate(),
            Self::Gauge { style, fraction, .. } => {
                if !fraction.is_finite() {
                    return Err(WidgetError::InvalidConfig(
                        "gauge fraction must be finite".to_owned(),
                    ));
                }
                style.validate()
            }
            Self::Sparkline { style, .. } => style.validate(),
        }
    }

    fn timing(&self) -> Option<AnimationTiming> {
        match self {
            Self::Ring { timing, .. }
            | Self::Gauge { timing, .. }
            | Self::Sparkline { timing, .. } => *timing,
        }
    }

    fn target_fraction(&self) -> f64 {
        match self {
            Self::Ring { current, goal, .. } => progress_fraction(*current, *goal),
            Self::Gauge { fraction, .. } => fraction.clamp(0.0, 1.0),
            Self::Sparkline { .. } => 1.0,
        }
    }
}

/// Serializable state dump for debugging and persistence-free handoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    pub config: WidgetEngineConfig,
    pub elapsed_ms: f64,
    pub widgets: IndexMap<String, WidgetSpec>,
    pub metadata: IndexMap<String, String>,
}

struct WidgetState {
    spec: WidgetSpec,
    controller: AnimationController,
    /// Engine clock reading when the widget mounted; drivers run relative to it.
    mounted_at_ms: f64,
}

/// Facade owning widget specs, their animation drivers, and the renderer.
///
/// All widgets share one frame clock: the host calls `advance_to` with
/// elapsed milliseconds from its frame source, then `render`. Removing a
/// widget stops its drivers before they are dropped, so stale frame
/// callbacks can never advance a destroyed widget's state.
pub struct WidgetEngine<R: Renderer> {
    renderer: R,
    config: WidgetEngineConfig,
    widgets: IndexMap<String, WidgetState>,
    metadata: IndexMap<String, String>,
    elapsed_ms: f64,
}

impl<R: Renderer> WidgetEngine<R> {
    pub fn new(renderer: R, config: WidgetEngineConfig) -> WidgetResult<Self> {
        config.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "widget engine initialized"
        );
        Ok(Self {
            renderer,
            config,
            widgets: IndexMap::new(),
            metadata: IndexMap::new(),
            elapsed_ms: 0.0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &WidgetEngineConfig {
        &self.config
    }

    /// Mounts a widget and starts its animation drivers.
    ///
    /// Re-adding an existing id unmounts the previous widget first.
    pub fn add_widget(&mut self, id: impl Into<String>, spec: WidgetSpec) -> WidgetResult<()> {
        let id = id.into();
        spec.validate()?;

        let timing = spec.timing().unwrap_or(self.config.default_timing);
        let mut controller = AnimationController::new();
        match &spec {
            WidgetSpec::Ring { .. } | WidgetSpec::Gauge { .. } => {
                controller.start_driver(
                    PROGRESS_DRIVER,
                    timing.driver_spec(spec.target_fraction()),
                )?;
            }
            WidgetSpec::Sparkline { style, .. } => {
                controller.start_driver(REVEAL_DRIVER, timing.driver_spec(1.0))?;
                if let Some(marker) = &style.marker {
                    controller.start_driver(
                        PULSE_DRIVER,
                        DriverSpec::new(1.0, marker.period_ms)
                            .with_easing(Easing::EaseInOut)
                            .with_repeat(RepeatPolicy::LoopMirror),
                    )?;
                }
            }
        }

        let state = WidgetState {
            spec,
            controller,
            mounted_at_ms: self.elapsed_ms,
        };
        if let Some(mut previous) = self.widgets.insert(id.clone(), state) {
            previous.controller.stop_all();
            debug!(widget = %id, "replaced mounted widget");
        }
        Ok(())
    }

    /// Unmounts a widget, stopping its drivers. Returns whether it existed.
    pub fn remove_widget(&mut self, id: &str) -> bool {
        match self.widgets.shift_remove(id) {
            Some(mut state) => {
                state.controller.stop_all();
                debug!(widget = %id, "unmounted widget");
                true
            }
            None => {
                warn!(widget = %id, "removed unknown widget");
                false
            }
        }
    }

    #[must_use]
    pub fn widget_ids(&self) -> Vec<&str> {
        self.widgets.keys().map(String::as_str).collect()
    }

    /// Advances the shared frame clock to `elapsed_ms`.
    pub fn advance_to(&mut self, elapsed_ms: f64) {
        self.elapsed_ms = elapsed_ms;
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Samples every widget's drivers at the current clock and assembles the
    /// deterministic scene for this frame.
    pub fn build_render_frame(&mut self) -> WidgetResult<RenderFrame> {
        let elapsed_ms = self.elapsed_ms;
        let mut frame = RenderFrame::new(self.config.viewport);

        for state in self.widgets.values_mut() {
            let WidgetState {
                spec,
                controller,
                mounted_at_ms,
            } = state;
            let elapsed_ms = elapsed_ms - *mounted_at_ms;
            match spec {
                WidgetSpec::Ring { style, .. } => {
                    let fraction = controller.sample(PROGRESS_DRIVER, elapsed_ms).unwrap_or(0.0);
                    frame.paths.extend(ring_scene(style, fraction));
                }
                WidgetSpec::Gauge { style, labels, .. } => {
                    let fraction = controller.sample(PROGRESS_DRIVER, elapsed_ms).unwrap_or(0.0);
                    let scene = gauge_scene(style, fraction, labels);
                    frame.paths.extend(scene.paths);
                    frame.ticks.extend(scene.ticks);
                    frame.labels.extend(scene.labels);
                }
                WidgetSpec::Sparkline { style, samples, .. } => {
                    let reveal = controller.sample(REVEAL_DRIVER, elapsed_ms).unwrap_or(1.0);
                    let pulse = match style.marker {
                        Some(_) => controller.sample(PULSE_DRIVER, elapsed_ms).unwrap_or(1.0),
                        None => 1.0,
                    };
                    frame
                        .paths
                        .extend(sparkline_scene(samples, style, reveal, pulse));
                }
            }
        }

        debug!(
            elapsed_ms,
            widgets = self.widgets.len(),
            paths = frame.paths.len(),
            "built render frame"
        );
        Ok(frame)
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> WidgetResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Attaches free-form metadata included in snapshots.
    ///
    /// `IndexMap` is used to preserve insertion order for stable snapshots.
    pub fn set_widget_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn widget_metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config,
            elapsed_ms: self.elapsed_ms,
            widgets: self
                .widgets
                .iter()
                .map(|(id, state)| (id.clone(), state.spec.clone()))
                .collect(),
            metadata: self.metadata.clone(),
        }
    }

    /// Serializes the engine state to pretty JSON.
    pub fn snapshot_json_pretty(&self) -> WidgetResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| WidgetError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
