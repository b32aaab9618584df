//! # Orrery
//!
//! A small retained 3D scene graph: procedural triangulated primitives, an
//! ownership tree of nodes with composable rigid transforms, a perspective
//! camera, and an orbit-style controller that turns raw pointer events into
//! a view transform.
//!
//! Windowing and rasterization stay outside the crate. The host
//! application owns the event loop and feeds pointer events into
//! [`camera::controller::OrbitController`]; drawing goes through the narrow
//! [`render::RenderBackend`] contract, which any immediate-mode backend
//! (or the built-in recording backend) can implement.
//!
//! ```
//! use orrery::prelude::*;
//! use cgmath::Vector3;
//!
//! let mut scene = Scene::new();
//! scene.attach(shapes::cuboid(Vector3::new(10.0, 10.0, 0.1)));
//! scene
//!     .attach(shapes::arrow(2.0, 0.05))
//!     .color = Some(Vector3::new(1.0, 0.0, 0.0));
//!
//! let mut camera = Camera::new();
//! let mut controller = OrbitController::new();
//! controller.set_view(0.0, std::f64::consts::FRAC_PI_2, 10.0, &mut camera);
//!
//! let mut backend = RecordingBackend::new(512, 512);
//! camera.render(&scene, &mut backend);
//! ```

pub mod assets;
pub mod camera;
pub mod geometry;
pub mod math;
pub mod prelude;
pub mod render;
pub mod scene;

pub use camera::controller::OrbitController;
pub use camera::Camera;
pub use math::Transform;
pub use scene::{Node, Scene};
