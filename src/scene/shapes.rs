//! # Shape Constructors
//!
//! Node-level constructors that bake a primitive mesh once and wrap it in
//! a scene [`Node`]. Endpoint-based variants reuse [`align`] to reposition
//! the Z-authored shape so it runs from `start` to `end`.
//!
//! Round shapes tessellate with [`FACETS`] subdivisions; call the
//! generators in [`crate::geometry::primitives`] directly for a different
//! density.

use super::Node;
use crate::assets::model;
use crate::assets::texture::Texture;
use crate::geometry::{primitives, Mesh, FACETS};
use crate::math::{align, Transform};
use cgmath::Vector3;
use log::warn;
use std::path::Path;
use std::sync::Arc;

/// A solid box with the given extents, centered on the origin.
pub fn cuboid(size: Vector3<f64>) -> Node {
    Node::with_mesh(primitives::cuboid(size))
}

/// A solid box translated to `offset`.
pub fn cuboid_at(size: Vector3<f64>, offset: Vector3<f64>) -> Node {
    let mut node = cuboid(size);
    node.transform = Transform::translation(offset);
    node
}

/// A box of square cross-section running from `start` to `end`.
///
/// `start` and `end` must not coincide.
pub fn beam(start: Vector3<f64>, end: Vector3<f64>, thickness: f64) -> Node {
    let (len, transform) = align(start, end);
    let mut node = cuboid(Vector3::new(thickness, thickness, len));
    node.transform = transform;
    node
}

/// The 12 edges of a box as unlit line segments.
pub fn wire_cuboid(size: Vector3<f64>) -> Node {
    Node::with_mesh(primitives::wire_cuboid(size))
}

/// Wireframe box translated to `offset`.
pub fn wire_cuboid_at(size: Vector3<f64>, offset: Vector3<f64>) -> Node {
    let mut node = wire_cuboid(size);
    node.transform = Transform::translation(offset);
    node
}

/// A sphere centered on the origin.
pub fn sphere(radius: f64) -> Node {
    Node::with_mesh(primitives::sphere(radius, FACETS))
}

/// A sphere translated to `offset`.
pub fn sphere_at(radius: f64, offset: Vector3<f64>) -> Node {
    let mut node = sphere(radius);
    node.transform = Transform::translation(offset);
    node
}

/// A straight cylinder along Z, centered on the origin.
pub fn cylinder(length: f64, radius: f64) -> Node {
    frustum(length, radius, radius)
}

/// A straight cylinder running from `start` to `end`.
pub fn cylinder_between(start: Vector3<f64>, end: Vector3<f64>, radius: f64) -> Node {
    frustum_between(start, end, radius, radius)
}

/// A generalized cylinder with different start and end radii.
pub fn frustum(length: f64, radius: f64, end_radius: f64) -> Node {
    Node::with_mesh(primitives::cylinder(length, radius, end_radius, FACETS))
}

/// A generalized cylinder running from `start` to `end`.
pub fn frustum_between(
    start: Vector3<f64>,
    end: Vector3<f64>,
    radius: f64,
    end_radius: f64,
) -> Node {
    let (len, transform) = align(start, end);
    let mut node = frustum(len, radius, end_radius);
    node.transform = transform;
    node
}

/// A cylinder ending in a point.
pub fn cone(length: f64, radius: f64) -> Node {
    frustum(length, radius, 0.0)
}

/// A cone running from `start` (base) to `end` (apex).
pub fn cone_between(start: Vector3<f64>, end: Vector3<f64>, radius: f64) -> Node {
    frustum_between(start, end, radius, 0.0)
}

/// An arrow along Z: a cylinder shaft with a cone head, head defaults
/// `head_length = 6 * radius` and `head_radius = head_length / 3`.
pub fn arrow(length: f64, radius: f64) -> Node {
    let head_length = radius * 6.0;
    arrow_with_head(length, radius, head_length, head_length / 3.0)
}

/// An arrow with explicit head dimensions.
///
/// The composite's color reaches both sub-parts: shaft and head carry no
/// color of their own, so they inherit whatever the arrow node draws with.
pub fn arrow_with_head(length: f64, radius: f64, head_length: f64, head_radius: f64) -> Node {
    let mut node = Node::group();
    node.color = Some(Vector3::new(1.0, 1.0, 1.0));

    let mut shaft = cylinder(length, radius);
    shaft.color = None;
    node.attach(shaft);

    let mut head = cone(head_length, head_radius);
    head.color = None;
    head.transform = Transform::translation(Vector3::new(0.0, 0.0, length / 2.0));
    node.attach(head);

    node
}

/// An arrow running from `start` to `end`.
pub fn arrow_between(start: Vector3<f64>, end: Vector3<f64>, radius: f64) -> Node {
    let (len, transform) = align(start, end);
    let mut node = arrow(len, radius);
    node.transform = transform;
    node
}

/// A capsule along Z: a cylinder with hemispherical end caps.
pub fn capsule(length: f64, radius: f64) -> Node {
    Node::with_mesh(primitives::capsule(length, radius, FACETS))
}

/// A capsule whose cylindrical section runs from `start` to `end`.
pub fn capsule_between(start: Vector3<f64>, end: Vector3<f64>, radius: f64) -> Node {
    let (len, transform) = align(start, end);
    let mut node = capsule(len, radius);
    node.transform = transform;
    node
}

/// A single untextured quad spanned by `vx` and `vy` about `center`.
pub fn plane(vx: Vector3<f64>, vy: Vector3<f64>, center: Vector3<f64>) -> Node {
    Node::with_mesh(primitives::plane(vx, vy, center, 1.0))
}

/// A textured quad; the texture tiles `repeat` times across it.
pub fn textured_plane(
    vx: Vector3<f64>,
    vy: Vector3<f64>,
    center: Vector3<f64>,
    texture: Arc<Texture>,
    repeat: f64,
) -> Node {
    Node::with_textured_mesh(primitives::plane(vx, vy, center, repeat), texture)
}

/// A model loaded from a binary triangle-soup file, every vertex scaled by
/// `scale`.
///
/// Malformed input never propagates: on failure the node completes with
/// empty geometry and a diagnostic; a truncated file yields the complete
/// records that were present.
pub fn model(path: &Path, scale: f64) -> Node {
    let mesh = match model::read(path, scale) {
        Ok(mesh) => mesh,
        Err(err) => {
            warn!("model load failed: {err}");
            Mesh::empty()
        }
    };
    Node::with_mesh(mesh)
}
