//! balanz-charts: deterministic widget geometry and animation core.
//!
//! This crate provides the shared math behind the Balanz dashboard widgets:
//! arc/ring geometry for progress gauges, tension-smoothed curves for
//! sparklines, and frame-driven animation drivers. All geometry is
//! deterministic and backend-agnostic so rendering code and tests consume
//! the exact same output.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{WidgetEngine, WidgetEngineConfig};
pub use error::{WidgetError, WidgetResult};
