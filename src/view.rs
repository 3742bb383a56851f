//! View state: the colors the user picked
//!
//! One color per shape kind plus the background. Changing a color never
//! touches the figures.

use serde::{Deserialize, Serialize};

use crate::sim::ShapeKind;

/// Named colors offered by the controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Green,
    Red,
    Blue,
    White,
    Black,
    Gray,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Green => "Green",
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::White => "White",
            Color::Black => "Black",
            Color::Gray => "Gray",
        }
    }

    /// Look up a color by (case-insensitive) name; unknown names are white
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "green" => Color::Green,
            "red" => Color::Red,
            "blue" => Color::Blue,
            "black" => Color::Black,
            "gray" | "grey" => Color::Gray,
            _ => Color::White,
        }
    }

    /// Linear RGBA in 0..=1
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Color::Green => [0.0, 1.0, 0.0, 1.0],
            Color::Red => [1.0, 0.0, 0.0, 1.0],
            Color::Blue => [0.0, 0.0, 1.0, 1.0],
            Color::White => [1.0, 1.0, 1.0, 1.0],
            Color::Black => [0.0, 0.0, 0.0, 1.0],
            Color::Gray => [0.5, 0.5, 0.5, 1.0],
        }
    }
}

/// What a color selection applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Shape(ShapeKind),
    Background,
}

/// Colors used for painting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub ball: Color,
    pub rectangle: Color,
    pub triangle: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ball: Color::Green,
            rectangle: Color::Green,
            triangle: Color::Green,
            background: Color::White,
        }
    }
}

impl Palette {
    pub fn shape_color(&self, kind: ShapeKind) -> Color {
        match kind {
            ShapeKind::Ball => self.ball,
            ShapeKind::Rectangle => self.rectangle,
            ShapeKind::Triangle => self.triangle,
        }
    }

    pub fn set(&mut self, target: ColorTarget, color: Color) {
        let slot = match target {
            ColorTarget::Shape(ShapeKind::Ball) => &mut self.ball,
            ColorTarget::Shape(ShapeKind::Rectangle) => &mut self.rectangle,
            ColorTarget::Shape(ShapeKind::Triangle) => &mut self.triangle,
            ColorTarget::Background => &mut self.background,
        };
        *slot = color;
    }
}
