//! # Render Backend Contract
//!
//! The narrow, backend-agnostic interface the scene graph draws through.
//! A real implementation would forward these calls to an immediate-mode
//! rasterizer; [`recording::RecordingBackend`] captures them as data for
//! headless use and tests.

pub mod recording;

use crate::assets::texture::Texture;
use crate::math::Transform;
use cgmath::{Matrix4, Vector2, Vector3};

/// Flat RGB color, components in 0..1.
pub type Color = Vector3<f64>;

/// Vertex batch topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    TriangleFan,
    Lines,
}

/// Minimal contract with the low-level rendering backend.
///
/// The backend owns an implicit model-view transform stack; the scene
/// traversal pushes each node's local transform on the way down and pops it
/// on the way back up.
pub trait RenderBackend {
    /// Current viewport dimensions in pixels, used for the aspect ratio.
    fn viewport_size(&self) -> (u32, u32);

    /// Clears the frame with the given color.
    fn clear(&mut self, color: Color);

    /// Sets the projection matrix.
    fn set_projection(&mut self, projection: Matrix4<f64>);

    /// Resets the model-view stack to the given view basis.
    fn load_view(&mut self, view: Transform);

    /// Pushes the stack and multiplies in a local transform.
    fn push_transform(&mut self, local: Transform);

    /// Pops the most recently pushed transform.
    fn pop_transform(&mut self);

    /// Sets the flat draw color applied to subsequent batches.
    fn set_color(&mut self, color: Color);

    /// Binds a texture for subsequent batches, or unbinds with `None`.
    fn bind_texture(&mut self, texture: Option<&Texture>);

    /// Opens a vertex batch of the given topology.
    fn begin(&mut self, topology: Topology);

    /// Sets the normal applied to subsequently submitted vertices.
    fn normal(&mut self, normal: Vector3<f64>);

    /// Sets the texture coordinates for the next vertex.
    fn tex_coord(&mut self, uv: Vector2<f64>);

    /// Submits a vertex position.
    fn vertex(&mut self, position: Vector3<f64>);

    /// Closes the current batch.
    fn end(&mut self);
}
