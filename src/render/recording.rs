//! Headless backend that records the draw command stream.
//!
//! Used as the crate's test double and by the demos; a unit test can render
//! a scene and assert on the exact sequence of submitted commands without a
//! window or GPU.

use super::{Color, RenderBackend, Topology};
use crate::assets::texture::Texture;
use crate::math::Transform;
use cgmath::{Matrix4, Vector2, Vector3};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Clear(Color),
    SetProjection(Matrix4<f64>),
    LoadView(Transform),
    PushTransform(Transform),
    PopTransform,
    SetColor(Color),
    BindTexture(Option<(u32, u32)>),
    Begin(Topology),
    Normal(Vector3<f64>),
    TexCoord(Vector2<f64>),
    Vertex(Vector3<f64>),
    End,
}

/// Records every backend call in order.
pub struct RecordingBackend {
    viewport: (u32, u32),
    pub commands: Vec<Command>,
}

impl RecordingBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width, height),
            commands: Vec::new(),
        }
    }

    /// Number of vertices submitted across all batches.
    pub fn vertex_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Vertex(_)))
            .count()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(Command::Clear(color));
    }

    fn set_projection(&mut self, projection: Matrix4<f64>) {
        self.commands.push(Command::SetProjection(projection));
    }

    fn load_view(&mut self, view: Transform) {
        self.commands.push(Command::LoadView(view));
    }

    fn push_transform(&mut self, local: Transform) {
        self.commands.push(Command::PushTransform(local));
    }

    fn pop_transform(&mut self) {
        self.commands.push(Command::PopTransform);
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(Command::SetColor(color));
    }

    fn bind_texture(&mut self, texture: Option<&Texture>) {
        self.commands
            .push(Command::BindTexture(texture.map(|t| (t.width, t.height))));
    }

    fn begin(&mut self, topology: Topology) {
        self.commands.push(Command::Begin(topology));
    }

    fn normal(&mut self, normal: Vector3<f64>) {
        self.commands.push(Command::Normal(normal));
    }

    fn tex_coord(&mut self, uv: Vector2<f64>) {
        self.commands.push(Command::TexCoord(uv));
    }

    fn vertex(&mut self, position: Vector3<f64>) {
        self.commands.push(Command::Vertex(position));
    }

    fn end(&mut self) {
        self.commands.push(Command::End);
    }
}
