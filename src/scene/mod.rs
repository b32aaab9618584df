//! # Scene Graph
//!
//! An ownership tree of [`Node`]s, each carrying a local [`Transform`] and
//! optionally a baked mesh. Children are owned exclusively, so dropping a
//! node drops its whole subtree exactly once and cycles cannot be built.
//!
//! Traversal composes transforms root-to-leaf through an explicit
//! [`RenderContext`] value instead of ambient global state: each node's
//! local transform is multiplied into the context (and pushed onto the
//! backend's stack), children are visited in insertion order, and the
//! context is dropped on return.

pub mod shapes;

use crate::assets::texture::Texture;
use crate::geometry::Mesh;
use crate::math::Transform;
use crate::render::{Color, RenderBackend, Topology};
use cgmath::Vector3;
use std::sync::Arc;

/// A node in the scene tree.
///
/// Grouping nodes carry only a transform; primitive nodes additionally own
/// an immutable mesh baked at construction. After construction only
/// `transform` and `color` are meant to change.
#[derive(Debug, Clone)]
pub struct Node {
    /// Position and orientation relative to the parent.
    pub transform: Transform,
    /// Draw color. `None` inherits the color in effect at the parent,
    /// which is how composite shapes propagate their color to sub-parts.
    pub color: Option<Color>,
    mesh: Option<Mesh>,
    texture: Option<Arc<Texture>>,
    children: Vec<Node>,
}

impl Node {
    /// A grouping node with an identity transform and no geometry.
    pub fn group() -> Self {
        Self {
            transform: Transform::identity(),
            color: None,
            mesh: None,
            texture: None,
            children: Vec::new(),
        }
    }

    /// A primitive node owning a baked mesh, default color white.
    pub fn with_mesh(mesh: Mesh) -> Self {
        Self {
            color: Some(Vector3::new(1.0, 1.0, 1.0)),
            mesh: Some(mesh),
            ..Self::group()
        }
    }

    /// A textured primitive node. The texture is shared; it is released
    /// when the last node referencing it is dropped.
    pub fn with_textured_mesh(mesh: Mesh, texture: Arc<Texture>) -> Self {
        Self {
            texture: Some(texture),
            ..Self::with_mesh(mesh)
        }
    }

    /// Appends a child, transferring ownership, and returns a reference to
    /// the stored child so construction can be chained:
    ///
    /// ```
    /// use orrery::scene::{shapes, Scene};
    /// use cgmath::Vector3;
    ///
    /// let mut scene = Scene::new();
    /// scene
    ///     .attach(shapes::sphere(1.0))
    ///     .color = Some(Vector3::new(1.0, 0.0, 0.0));
    /// ```
    pub fn attach(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        // Just pushed, so the vec is non-empty.
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Children in insertion order, which is also draw order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// The baked mesh, if this node draws anything itself.
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    pub fn texture(&self) -> Option<&Arc<Texture>> {
        self.texture.as_ref()
    }

    /// Draws this node and its subtree.
    ///
    /// Multiplies the local transform into the context and the backend's
    /// stack, emits the mesh if present, recurses in insertion order, and
    /// restores the stack on return.
    pub fn draw(&self, ctx: RenderContext, backend: &mut dyn RenderBackend) {
        let ctx = RenderContext {
            transform: ctx.transform * self.transform,
            color: self.color.unwrap_or(ctx.color),
        };

        backend.push_transform(self.transform);
        if let Some(mesh) = &self.mesh {
            emit(mesh, self.texture.as_deref(), ctx.color, backend);
        }
        for child in &self.children {
            child.draw(ctx, backend);
        }
        backend.pop_transform();
    }
}

/// Immutable per-call draw state threaded through the traversal:
/// the accumulated transform from the root and the color in effect.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub transform: Transform,
    pub color: Color,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            transform: Transform::identity(),
            color: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

fn emit(mesh: &Mesh, texture: Option<&Texture>, color: Color, backend: &mut dyn RenderBackend) {
    backend.set_color(color);
    match mesh {
        Mesh::Triangles(triangles) => {
            if let Some(texture) = texture {
                backend.bind_texture(Some(texture));
            }
            backend.begin(Topology::Triangles);
            for triangle in triangles {
                for vertex in &triangle.vertices {
                    backend.normal(vertex.normal);
                    if texture.is_some() {
                        if let Some(uv) = vertex.uv {
                            backend.tex_coord(uv);
                        }
                    }
                    backend.vertex(vertex.position);
                }
            }
            backend.end();
            if texture.is_some() {
                backend.bind_texture(None);
            }
        }
        Mesh::Lines(lines) => {
            backend.begin(Topology::Lines);
            for [a, b] in lines {
                backend.vertex(*a);
                backend.vertex(*b);
            }
            backend.end();
        }
    }
}

/// The tree root: owns the background clear color and the node tree.
/// Never attached to another node.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Background clear color, default black.
    pub background: Color,
    pub root: Node,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            background: Vector3::new(0.0, 0.0, 0.0),
            root: Node::group(),
        }
    }

    /// Attaches a node to the root. See [`Node::attach`].
    pub fn attach(&mut self, node: Node) -> &mut Node {
        self.root.attach(node)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
