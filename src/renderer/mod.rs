//! Rendering module
//!
//! Turns the model into a backend-agnostic draw list. A GUI shell either
//! replays the list onto its own canvas through [`Surface`], or uploads the
//! tessellated vertices to the GPU.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{DrawCommand, Frame, Surface};
pub use vertex::Vertex;
