//! # Camera
//!
//! Derives a perspective projection from the field of view and the current
//! viewport aspect, loads its own transform as the view basis, and walks a
//! [`Scene`] to render it. The interactive [`controller::OrbitController`]
//! drives the camera transform from pointer input.

pub mod controller;

use crate::math::Transform;
use crate::render::RenderBackend;
use crate::scene::{RenderContext, Scene};
use cgmath::Matrix4;

/// Default vertical field of view in radians, chosen so an object of size
/// X fills the vertical frame at distance X.
pub const DEFAULT_FOVY: f64 = 0.92;

/// View transform plus vertical field of view.
///
/// The camera references the scene it draws only for the duration of a
/// [`render`](Camera::render) call; it owns nothing but its own state.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// View transform applied before the scene's node transforms.
    pub transform: Transform,
    /// Vertical field of view in radians.
    pub fovy: f64,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            transform: Transform::identity(),
            fovy: DEFAULT_FOVY,
        }
    }

    /// Standard OpenGL-style perspective projection with near plane 1 and
    /// far plane 100, column-major.
    pub fn projection(&self, aspect: f64) -> Matrix4<f64> {
        let f = 1.0 / (self.fovy / 2.0).tan();
        let (near, far) = (1.0, 100.0);

        #[rustfmt::skip]
        let projection = Matrix4::new(
            f / aspect, 0.0, 0.0,                               0.0,
            0.0,        f,   0.0,                               0.0,
            0.0,        0.0, (far + near) / (near - far),      -1.0,
            0.0,        0.0, 2.0 * far * near / (near - far),   0.0,
        );
        projection
    }

    /// Renders the scene: clears with its background, sets the projection
    /// for the current viewport, loads the view basis, and draws the tree.
    pub fn render(&self, scene: &Scene, backend: &mut dyn RenderBackend) {
        let (width, height) = backend.viewport_size();
        let aspect = width as f64 / height as f64;

        backend.clear(scene.background);
        backend.set_projection(self.projection(aspect));
        backend.load_view(self.transform);

        scene.root.draw(RenderContext::new(), backend);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn projection_matches_reference_formula() {
        let camera = Camera::new();
        let aspect = 4.0 / 3.0;
        let m = camera.projection(aspect);

        let f = 1.0 / (DEFAULT_FOVY / 2.0).tan();
        assert_relative_eq!(m.x.x, f / aspect, epsilon = 1e-12);
        assert_relative_eq!(m.y.y, f, epsilon = 1e-12);
        assert_relative_eq!(m.z.z, 101.0 / -99.0, epsilon = 1e-12);
        assert_relative_eq!(m.z.w, -1.0);
        assert_relative_eq!(m.w.z, 200.0 / -99.0, epsilon = 1e-12);
        assert_relative_eq!(m.w.w, 0.0);
    }
}
