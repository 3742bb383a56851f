//! Per-frame draw list
//!
//! A frame is the background fill followed by the eight mirrored copies of
//! every figure, in collection order, each in its shape kind's color.

use glam::IVec2;
use serde::Serialize;

use super::shapes::{self, OVAL_SEGMENTS};
use super::vertex::Vertex;
use crate::sim::{Model, Orientation, Shape, placements};
use crate::view::{Color, Palette};

/// Something a frame can be painted on (a GUI canvas, an image, a test recorder)
pub trait Surface {
    fn fill_background(&mut self, color: Color, size: IVec2);
    fn fill_oval(&mut self, color: Color, anchor: IVec2, size: IVec2);
    fn fill_rect(&mut self, color: Color, anchor: IVec2, size: IVec2);
    fn fill_polygon(&mut self, color: Color, points: &[IVec2]);
}

/// One primitive fill
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Background { color: Color, size: IVec2 },
    Oval { color: Color, anchor: IVec2, size: IVec2 },
    Rect { color: Color, anchor: IVec2, size: IVec2 },
    Polygon { color: Color, points: [IVec2; 3] },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub viewport: IVec2,
    /// Tick the frame was built from
    pub tick: u64,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Build the draw list for the current model state.
    ///
    /// `base` is the orientation of each triangle's unmirrored copy.
    pub fn build(model: &Model, palette: &Palette, viewport: IVec2, base: Orientation) -> Self {
        let mut commands = Vec::with_capacity(1 + model.len() * 8);
        commands.push(DrawCommand::Background {
            color: palette.background,
            size: viewport,
        });

        for figure in model.figures() {
            let color = palette.shape_color(figure.kind());
            for p in placements(figure.pos, figure.size(), viewport, base) {
                commands.push(match figure.shape {
                    Shape::Ball { .. } => DrawCommand::Oval {
                        color,
                        anchor: p.anchor,
                        size: p.size,
                    },
                    Shape::Rectangle { .. } => DrawCommand::Rect {
                        color,
                        anchor: p.anchor,
                        size: p.size,
                    },
                    Shape::Triangle { .. } => DrawCommand::Polygon {
                        color,
                        points: p.orientation.triangle(p.anchor, p.size),
                    },
                });
            }
        }

        Self {
            viewport,
            tick: model.time_ticks,
            commands,
        }
    }

    /// Replay the draw list onto a surface
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Background { color, size } => surface.fill_background(*color, *size),
                DrawCommand::Oval {
                    color,
                    anchor,
                    size,
                } => surface.fill_oval(*color, *anchor, *size),
                DrawCommand::Rect {
                    color,
                    anchor,
                    size,
                } => surface.fill_rect(*color, *anchor, *size),
                DrawCommand::Polygon { color, points } => surface.fill_polygon(*color, points),
            }
        }
    }

    /// Triangle-list vertices for the whole frame, background included
    pub fn tessellate(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::Background { color, size } => {
                    vertices.extend(shapes::rect(IVec2::ZERO, *size, color.rgba()))
                }
                DrawCommand::Oval {
                    color,
                    anchor,
                    size,
                } => vertices.extend(shapes::oval(*anchor, *size, color.rgba(), OVAL_SEGMENTS)),
                DrawCommand::Rect {
                    color,
                    anchor,
                    size,
                } => vertices.extend(shapes::rect(*anchor, *size, color.rgba())),
                DrawCommand::Polygon { color, points } => {
                    vertices.extend(shapes::polygon(points, color.rgba()))
                }
            }
        }
        vertices
    }
}
