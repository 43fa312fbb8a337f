use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::error::{WidgetError, WidgetResult};

/// One vector-path command in pixel space.
///
/// Angles and flags follow SVG path semantics so `Path::to_svg` is a direct
/// serialization. Coordinates stay `f64` until serialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    /// Elliptical arc to `(x, y)`.
    ///
    /// `large_arc` picks the longer of the two candidate arcs;
    /// `sweep_clockwise` picks the clockwise one in screen coordinates.
    ArcTo {
        radius_x: f64,
        radius_y: f64,
        rotation_deg: f64,
        large_arc: bool,
        sweep_clockwise: bool,
        x: f64,
        y: f64,
    },
    /// Cubic Bezier segment to `(x, y)` through two control points.
    CubicTo {
        ctrl1_x: f64,
        ctrl1_y: f64,
        ctrl2_x: f64,
        ctrl2_y: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    pub fn validate(self) -> WidgetResult<()> {
        let coords: SmallVec<[f64; 6]> = match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => SmallVec::from_slice(&[x, y]),
            Self::ArcTo {
                radius_x,
                radius_y,
                rotation_deg,
                x,
                y,
                ..
            } => {
                if !radius_x.is_finite() || !radius_y.is_finite() || radius_x < 0.0 || radius_y < 0.0
                {
                    return Err(WidgetError::InvalidData(
                        "arc radii must be finite and non-negative".to_owned(),
                    ));
                }
                SmallVec::from_slice(&[rotation_deg, x, y])
            }
            Self::CubicTo {
                ctrl1_x,
                ctrl1_y,
                ctrl2_x,
                ctrl2_y,
                x,
                y,
            } => SmallVec::from_slice(&[ctrl1_x, ctrl1_y, ctrl2_x, ctrl2_y, x, y]),
            Self::Close => SmallVec::new(),
        };

        if coords.iter().any(|value| !value.is_finite()) {
            return Err(WidgetError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Ordered command list describing one render-ready vector path.
///
/// Output-only by contract: consumers serialize or replay the commands, they
/// never parse a path back into chart semantics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: SmallVec<[PathCommand; 8]>,
}

impl Path {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn validate(&self) -> WidgetResult<()> {
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    /// Serializes to an SVG `d`-attribute string.
    ///
    /// Coordinates are rounded to 3 decimals here and only here; identical
    /// command lists always serialize to byte-identical strings.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            match *command {
                PathCommand::MoveTo { x, y } => {
                    let _ = write!(out, "M {} {}", fmt3(x), fmt3(y));
                }
                PathCommand::LineTo { x, y } => {
                    let _ = write!(out, "L {} {}", fmt3(x), fmt3(y));
                }
                PathCommand::ArcTo {
                    radius_x,
                    radius_y,
                    rotation_deg,
                    large_arc,
                    sweep_clockwise,
                    x,
                    y,
                } => {
                    let _ = write!(
                        out,
                        "A {} {} {} {} {} {} {}",
                        fmt3(radius_x),
                        fmt3(radius_y),
                        fmt3(rotation_deg),
                        u8::from(large_arc),
                        u8::from(sweep_clockwise),
                        fmt3(x),
                        fmt3(y)
                    );
                }
                PathCommand::CubicTo {
                    ctrl1_x,
                    ctrl1_y,
                    ctrl2_x,
                    ctrl2_y,
                    x,
                    y,
                } => {
                    let _ = write!(
                        out,
                        "C {} {} {} {} {} {}",
                        fmt3(ctrl1_x),
                        fmt3(ctrl1_y),
                        fmt3(ctrl2_x),
                        fmt3(ctrl2_y),
                        fmt3(x),
                        fmt3(y)
                    );
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        out
    }
}

impl Extend<PathCommand> for Path {
    fn extend<T: IntoIterator<Item = PathCommand>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}

/// Fixed-precision coordinate formatting with a stable `-0` normalization.
fn fmt3(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // `-0.000` and `0.000` must not depend on the sign of a rounded-away part.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.3}")
}

#[cfg(test)]
mod tests {
    use super::{Path, PathCommand};

    #[test]
    fn serialization_is_deterministic() {
        let mut path = Path::empty();
        path.push(PathCommand::MoveTo { x: 1.23456, y: 2.0 });
        path.push(PathCommand::LineTo { x: -0.0001, y: 3.5 });
        let first = path.to_svg();
        let second = path.to_svg();
        assert_eq!(first, second);
        assert_eq!(first, "M 1.235 2.000 L 0.000 3.500");
    }

    #[test]
    fn empty_path_serializes_to_empty_string() {
        assert_eq!(Path::empty().to_svg(), "");
    }
}
