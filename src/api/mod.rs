mod engine;
mod engine_config;
mod progress;
mod scene;
mod widget_style;

pub use engine::{EngineSnapshot, WidgetEngine, WidgetSpec};
pub use engine_config::WidgetEngineConfig;
pub use progress::progress_fraction;
pub use scene::{GaugeScene, gauge_scene, ring_scene, sparkline_scene};
pub use widget_style::{AnimationTiming, GaugeStyle, PulseMarker, RingStyle, SparklineStyle};
