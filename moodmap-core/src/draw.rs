//! Draw commands and the surface they are issued to.
//!
//! A frame is an ordered list of [`DrawCommand`]s. The browser executes them on
//! a 2D canvas context; tests record them with [`CommandLog`].

use crate::color::Rgba;
use crate::types::PixelPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient, 0.0–1.0.
    pub offset: f64,
    pub color: Rgba,
}

/// Concentric radial gradient from `inner_radius` to `outer_radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: PixelPoint,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Two-stop gradient from the center outwards.
    pub fn new(center: PixelPoint, radius: f64, inner: Rgba, outer: Rgba) -> Self {
        Self {
            center,
            inner_radius: 0.0,
            outer_radius: radius,
            stops: vec![
                ColorStop { offset: 0.0, color: inner },
                ColorStop { offset: 1.0, color: outer },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Radial(RadialGradient),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Reset the whole surface to transparent.
    Clear { width: f64, height: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64, paint: Paint },
    FillCircle { center: PixelPoint, radius: f64, paint: Paint },
    StrokeCircle { center: PixelPoint, radius: f64, color: Rgba, line_width: f64 },
    StrokeLine { from: PixelPoint, to: PixelPoint, color: Rgba, line_width: f64 },
    FillText { text: String, at: PixelPoint, font: &'static str, color: Rgba },
}

/// Anything that can execute draw commands in order.
pub trait Surface {
    fn draw(&mut self, cmd: &DrawCommand);
}

/// Surface that only records what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct CommandLog {
    pub commands: Vec<DrawCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Texts drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for CommandLog {
    fn draw(&mut self, cmd: &DrawCommand) {
        self.commands.push(cmd.clone());
    }
}
