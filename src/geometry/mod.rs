//! # Baked Mesh Geometry
//!
//! Immutable triangle-list and line-list meshes, plus the procedural
//! generators in [`primitives`] that bake them. A mesh is computed once at
//! shape construction and never regenerated.

pub mod primitives;

use cgmath::{Vector2, Vector3};

/// Circumferential subdivision used by the node-level shape constructors
/// for all round shapes. Must be divisible by 4 (the capsule walk switches
/// hemisphere frames at a quarter turn).
pub const FACETS: u32 = 20;

/// A mesh vertex: position, outward normal, and optional texture
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vector3<f64>,
    pub normal: Vector3<f64>,
    pub uv: Option<Vector2<f64>>,
}

impl Vertex {
    pub fn new(position: Vector3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            normal,
            uv: None,
        }
    }

    pub fn textured(position: Vector3<f64>, normal: Vector3<f64>, uv: Vector2<f64>) -> Self {
        Self {
            position,
            normal,
            uv: Some(uv),
        }
    }
}

/// A single triangle, counter-clockwise when viewed from outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Average of the three vertex positions.
    pub fn centroid(&self) -> Vector3<f64> {
        (self.vertices[0].position + self.vertices[1].position + self.vertices[2].position) / 3.0
    }
}

/// Baked mesh data for a primitive.
///
/// Solid shapes are triangle lists; the wireframe box is a line list drawn
/// without lighting state.
#[derive(Debug, Clone, PartialEq)]
pub enum Mesh {
    Triangles(Vec<Triangle>),
    Lines(Vec<[Vector3<f64>; 2]>),
}

impl Mesh {
    /// An empty triangle list, used when model loading fails entirely.
    pub fn empty() -> Self {
        Mesh::Triangles(Vec::new())
    }

    /// The triangles of this mesh; empty for line meshes.
    pub fn triangles(&self) -> &[Triangle] {
        match self {
            Mesh::Triangles(triangles) => triangles,
            Mesh::Lines(_) => &[],
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles().len()
    }
}

/// Appends a quad as two triangles, preserving winding order.
pub(crate) fn quad(out: &mut Vec<Triangle>, v: [Vertex; 4]) {
    out.push(Triangle::new(v[0], v[1], v[2]));
    out.push(Triangle::new(v[2], v[3], v[0]));
}
