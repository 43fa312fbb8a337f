mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FillStyle, GradientStop, LabelAnchor, LabelPrimitive, PathPrimitive, TickPrimitive,
};

use crate::error::WidgetResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from widget geometry and animation logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> WidgetResult<()>;
}
