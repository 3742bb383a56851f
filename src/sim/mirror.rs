//! Mirrored placements for the kaleidoscope effect
//!
//! Every figure is drawn eight times: as-is, mirrored across the vertical
//! and horizontal centre lines, and the same four again after reflecting
//! across the main diagonal through the viewport centre. Placements are
//! only ever used for drawing.

use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for an unrecognized triangle orientation tag
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrientationError {
    #[error("Invalid triangle orientation: {0:?} (expected up, down, left or right)")]
    Invalid(String),
}

/// Direction a triangle's apex points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Down => "down",
            Orientation::Left => "left",
            Orientation::Right => "right",
        }
    }

    /// Mirror across a vertical line
    pub fn flip_horizontal(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            other => other,
        }
    }

    /// Mirror across a horizontal line
    pub fn flip_vertical(self) -> Self {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
            other => other,
        }
    }

    /// Reflect across the main diagonal (x and y swap roles)
    pub fn transpose(self) -> Self {
        match self {
            Orientation::Up => Orientation::Left,
            Orientation::Left => Orientation::Up,
            Orientation::Down => Orientation::Right,
            Orientation::Right => Orientation::Down,
        }
    }

    /// Orientation after applying a mirror kind (transpose first)
    pub fn reflect(self, kind: MirrorKind) -> Self {
        let o = if kind.is_transposed() { self.transpose() } else { self };
        let o = if kind.flips_x() { o.flip_horizontal() } else { o };
        if kind.flips_y() { o.flip_vertical() } else { o }
    }

    /// Vertices of a triangle filling the box at `anchor` with `size`
    pub fn triangle(self, anchor: IVec2, size: IVec2) -> [IVec2; 3] {
        let (x, y) = (anchor.x, anchor.y);
        let (right, bottom) = (x.saturating_add(size.x), y.saturating_add(size.y));
        let (mid_x, mid_y) = (x.saturating_add(size.x / 2), y.saturating_add(size.y / 2));
        match self {
            Orientation::Up => [
                IVec2::new(x, bottom),
                IVec2::new(mid_x, y),
                IVec2::new(right, bottom),
            ],
            Orientation::Down => [
                IVec2::new(x, y),
                IVec2::new(right, y),
                IVec2::new(mid_x, bottom),
            ],
            Orientation::Left => [
                IVec2::new(x, mid_y),
                IVec2::new(right, y),
                IVec2::new(right, bottom),
            ],
            Orientation::Right => [
                IVec2::new(x, y),
                IVec2::new(right, mid_y),
                IVec2::new(x, bottom),
            ],
        }
    }
}

impl FromStr for Orientation {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Orientation::Up),
            "down" => Ok(Orientation::Down),
            "left" => Ok(Orientation::Left),
            "right" => Ok(Orientation::Right),
            _ => Err(OrientationError::Invalid(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the eight reflections produced a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorKind {
    Identity,
    Horizontal,
    Vertical,
    Both,
    Transpose,
    TransposeHorizontal,
    TransposeVertical,
    TransposeBoth,
}

impl MirrorKind {
    /// All kinds in drawing order
    pub const ALL: [MirrorKind; 8] = [
        MirrorKind::Identity,
        MirrorKind::Horizontal,
        MirrorKind::Vertical,
        MirrorKind::Both,
        MirrorKind::Transpose,
        MirrorKind::TransposeHorizontal,
        MirrorKind::TransposeVertical,
        MirrorKind::TransposeBoth,
    ];

    pub fn is_transposed(self) -> bool {
        matches!(
            self,
            MirrorKind::Transpose
                | MirrorKind::TransposeHorizontal
                | MirrorKind::TransposeVertical
                | MirrorKind::TransposeBoth
        )
    }

    pub fn flips_x(self) -> bool {
        matches!(
            self,
            MirrorKind::Horizontal
                | MirrorKind::Both
                | MirrorKind::TransposeHorizontal
                | MirrorKind::TransposeBoth
        )
    }

    pub fn flips_y(self) -> bool {
        matches!(
            self,
            MirrorKind::Vertical
                | MirrorKind::Both
                | MirrorKind::TransposeVertical
                | MirrorKind::TransposeBoth
        )
    }

    /// Box of the figure at `anchor`/`size` after this reflection in `viewport`
    pub fn apply(self, anchor: IVec2, size: IVec2, viewport: IVec2) -> (IVec2, IVec2) {
        let (anchor, size) = if self.is_transposed() {
            transpose(anchor, size, viewport)
        } else {
            (anchor, size)
        };
        let x = if self.flips_x() { mirror_x(anchor.x, size.x, viewport.x) } else { anchor.x };
        let y = if self.flips_y() { mirror_y(anchor.y, size.y, viewport.y) } else { anchor.y };
        (IVec2::new(x, y), size)
    }
}

/// One mirrored copy of a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: MirrorKind,
    /// Top-left of the drawn box
    pub anchor: IVec2,
    /// Drawn box size (width and height swap on transposed copies)
    pub size: IVec2,
    /// Triangle orientation for this copy
    pub orientation: Orientation,
}

/// Compute all eight placements of a figure.
///
/// `base` is the orientation of the identity copy; the others derive from it
/// so triangles stay symmetric around the centre.
pub fn placements(anchor: IVec2, size: IVec2, viewport: IVec2, base: Orientation) -> [Placement; 8] {
    MirrorKind::ALL.map(|kind| {
        let (anchor, size) = kind.apply(anchor, size, viewport);
        Placement {
            kind,
            anchor,
            size,
            orientation: base.reflect(kind),
        }
    })
}

/// Mirror an x anchor across the vertical centre line
#[inline]
pub fn mirror_x(x: i32, width: i32, viewport_width: i32) -> i32 {
    viewport_width.saturating_sub(x).saturating_sub(width)
}

/// Mirror a y anchor across the horizontal centre line
#[inline]
pub fn mirror_y(y: i32, height: i32, viewport_height: i32) -> i32 {
    viewport_height.saturating_sub(y).saturating_sub(height)
}

/// Reflect a box across the main diagonal through the viewport centre.
///
/// Unlike the classic `(y - h, x - w)` offsets, the copy is not shifted by
/// the figure size, so transposing twice on a square viewport is exact.
#[inline]
pub fn transpose(anchor: IVec2, size: IVec2, viewport: IVec2) -> (IVec2, IVec2) {
    let x = anchor.y.saturating_add(viewport.x.saturating_sub(viewport.y).div_euclid(2));
    let y = anchor.x.saturating_add(viewport.y.saturating_sub(viewport.x).div_euclid(2));
    (IVec2::new(x, y), IVec2::new(size.y, size.x))
}
