//! Line-list generation for outlines

use glam::Vec2;

use super::vertex::Vertex;
use super::{ObjectKind, Surface};
use crate::sim::Bounds;

/// Closed outline as line-list vertices (two per edge)
pub fn outline_lines(outline: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if outline.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(outline.len() * 2);
    for (i, a) in outline.iter().enumerate() {
        let b = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }
    vertices
}

/// A surface that batches every outline into one line-list buffer
#[derive(Debug, Default)]
pub struct LineBatch {
    pub bounds: Option<Bounds>,
    pub vertices: Vec<Vertex>,
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Surface for LineBatch {
    fn begin(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
        self.vertices.clear();
    }

    fn draw_outline(&mut self, kind: ObjectKind, outline: &[Vec2]) {
        self.vertices.extend(outline_lines(outline, kind.color()));
    }
}
