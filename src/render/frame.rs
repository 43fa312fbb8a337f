use crate::core::Viewport;
use crate::error::{WidgetError, WidgetResult};
use crate::render::{LabelPrimitive, PathPrimitive, TickPrimitive};

/// Backend-agnostic scene for one widget draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub paths: Vec<PathPrimitive>,
    pub ticks: Vec<TickPrimitive>,
    pub labels: Vec<LabelPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paths: Vec::new(),
            ticks: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_tick(mut self, tick: TickPrimitive) -> Self {
        self.ticks.push(tick);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelPrimitive) -> Self {
        self.labels.push(label);
        self
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if !self.viewport.is_valid() {
            return Err(WidgetError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for path in &self.paths {
            path.validate()?;
        }
        for tick in &self.ticks {
            tick.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.ticks.is_empty() && self.labels.is_empty()
    }
}
