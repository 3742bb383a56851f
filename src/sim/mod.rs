//! Simulation module
//!
//! All motion logic lives here. Nothing in this module draws:
//! - Integer pixel arithmetic only
//! - Seeded RNG only
//! - Stable iteration order (by figure index)
//! - Mirrored placements are computed for rendering and never fed back

pub mod animator;
pub mod figure;
pub mod mirror;
pub mod model;

pub use animator::Animator;
pub use figure::{Figure, Shape, ShapeKind};
pub use mirror::{MirrorKind, Orientation, OrientationError, Placement, placements};
pub use model::{Model, SharedModel, StateChanged, shared};

use thiserror::Error;

/// Errors from the simulation layer
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("Speed factor must be finite and positive, got {0}")]
    InvalidSpeedFactor(f32),

    #[error("Animation is already running")]
    AlreadyRunning,
}
