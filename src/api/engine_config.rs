use serde::{Deserialize, Serialize};

use crate::api::widget_style::AnimationTiming;
use crate::core::Viewport;
use crate::error::{WidgetError, WidgetResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load widget
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetEngineConfig {
    pub viewport: Viewport,
    /// Timing applied to widgets that do not carry their own.
    #[serde(default)]
    pub default_timing: AnimationTiming,
}

impl WidgetEngineConfig {
    /// Creates a minimal config with default animation timing.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            default_timing: AnimationTiming::default(),
        }
    }

    /// Sets the timing fallback for widgets without explicit timing.
    #[must_use]
    pub fn with_default_timing(mut self, timing: AnimationTiming) -> Self {
        self.default_timing = timing;
        self
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if !self.viewport.is_valid() {
            return Err(WidgetError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.default_timing.driver_spec(1.0).validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> WidgetResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| WidgetError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| WidgetError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}
