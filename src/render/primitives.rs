use serde::{Deserialize, Serialize};

use crate::core::Path;
use crate::error::{WidgetError, WidgetResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Colors are cosmetic pass-through data: the core never computes with them
/// beyond validation, it hands them to whatever backend draws the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> WidgetResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WidgetError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One stop of a pass-through gradient, offset in `[0, 1]` along the fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    #[must_use]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }

    pub fn validate(self) -> WidgetResult<()> {
        if !self.offset.is_finite() || !(0.0..=1.0).contains(&self.offset) {
            return Err(WidgetError::InvalidData(format!(
                "gradient stop offset must be finite and in [0, 1], got {}",
                self.offset
            )));
        }
        self.color.validate()
    }
}

/// Fill applied to a closed path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FillStyle {
    Solid(Color),
    Gradient(Vec<GradientStop>),
}

impl FillStyle {
    pub fn validate(&self) -> WidgetResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::Gradient(stops) => {
                if stops.len() < 2 {
                    return Err(WidgetError::InvalidData(
                        "gradient fill needs at least 2 stops".to_owned(),
                    ));
                }
                for stop in stops {
                    stop.validate()?;
                }
                Ok(())
            }
        }
    }
}

/// Draw command for one vector path with its stroke and optional fill.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub path: Path,
    pub stroke_width: f64,
    pub stroke: Option<Color>,
    pub fill: Option<FillStyle>,
}

impl PathPrimitive {
    /// Stroke-only path, no fill.
    #[must_use]
    pub fn stroked(path: Path, stroke_width: f64, color: Color) -> Self {
        Self {
            path,
            stroke_width,
            stroke: Some(color),
            fill: None,
        }
    }

    /// Fill-only path, no stroke.
    #[must_use]
    pub fn filled(path: Path, fill: FillStyle) -> Self {
        Self {
            path,
            stroke_width: 0.0,
            stroke: None,
            fill: Some(fill),
        }
    }

    pub fn validate(&self) -> WidgetResult<()> {
        self.path.validate()?;
        if self.stroke.is_none() && self.fill.is_none() {
            return Err(WidgetError::InvalidData(
                "path primitive needs a stroke or a fill".to_owned(),
            ));
        }
        if let Some(color) = self.stroke {
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(WidgetError::InvalidData(
                    "stroked path needs a finite stroke width > 0".to_owned(),
                ));
            }
            color.validate()?;
        }
        if let Some(fill) = &self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one radial gauge tick stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl TickPrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> WidgetResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(WidgetError::InvalidData(
                "tick coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(WidgetError::InvalidData(
                "tick stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Anchor of a label relative to its `(x, y)` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAnchor {
    Start,
    Middle,
    End,
}

/// Draw command for one scale or value label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub anchor: LabelAnchor,
}

impl LabelPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        anchor: LabelAnchor,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            anchor,
        }
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if self.text.is_empty() {
            return Err(WidgetError::InvalidData(
                "label primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(WidgetError::InvalidData(
                "label coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(WidgetError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
