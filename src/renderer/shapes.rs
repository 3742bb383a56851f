//! Shape tessellation for 2D primitives
//!
//! Every primitive becomes a triangle list in pixel coordinates.

use glam::{IVec2, Vec2};
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Default segment count for ovals
pub const OVAL_SEGMENTS: u32 = 24;

/// Generate vertices for a filled oval inscribed in the box at `anchor`
pub fn oval(anchor: IVec2, size: IVec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let radius = size.as_vec2() / 2.0;
    let center = anchor.as_vec2() + radius;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let edge1 = center + radius * Vec2::new(theta1.cos(), theta1.sin());
        let edge2 = center + radius * Vec2::new(theta2.cos(), theta2.sin());

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(edge1.x, edge1.y, color));
        vertices.push(Vertex::new(edge2.x, edge2.y, color));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(anchor: IVec2, size: IVec2, color: [f32; 4]) -> Vec<Vertex> {
    let top_left = anchor;
    let top_right = anchor.saturating_add(IVec2::new(size.x, 0));
    let bottom_left = anchor.saturating_add(IVec2::new(0, size.y));
    let bottom_right = anchor.saturating_add(size);

    // Two triangles
    vec![
        Vertex::at(top_left, color),
        Vertex::at(bottom_left, color),
        Vertex::at(top_right, color),
        Vertex::at(top_right, color),
        Vertex::at(bottom_left, color),
        Vertex::at(bottom_right, color),
    ]
}

/// Generate vertices for a filled convex polygon (fan from the first point)
pub fn polygon(points: &[IVec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::at(points[0], color));
        vertices.push(Vertex::at(pair[0], color));
        vertices.push(Vertex::at(pair[1], color));
    }

    vertices
}
