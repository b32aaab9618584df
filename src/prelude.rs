//! # Orrery Prelude
//!
//! One-stop import for typical applications:
//!
//! ```rust
//! use orrery::prelude::*;
//! ```

pub use crate::camera::controller::{Button, ButtonState, OrbitController};
pub use crate::camera::{Camera, DEFAULT_FOVY};
pub use crate::geometry::{Mesh, Triangle, Vertex, FACETS};
pub use crate::math::{align, Transform};
pub use crate::render::recording::RecordingBackend;
pub use crate::render::{Color, RenderBackend, Topology};
pub use crate::scene::{shapes, Node, RenderContext, Scene};

// Common math re-exports
pub use cgmath::{InnerSpace, Vector3, Zero};
