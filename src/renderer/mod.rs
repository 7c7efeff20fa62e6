//! Render-sink contract
//!
//! The core never draws pixels. It hands a [`Snapshot`] of placed outlines
//! to whatever [`Surface`] the shell provides.

pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use shapes::LineBatch;
pub use snapshot::{ObjectKind, ObjectView, Snapshot};
pub use vertex::Vertex;

use glam::Vec2;

use crate::sim::Bounds;

/// A drawing surface owned by the shell
pub trait Surface {
    /// Called once before a frame's outlines
    fn begin(&mut self, _bounds: Bounds) {}

    /// Draw one closed outline in screen coordinates
    fn draw_outline(&mut self, kind: ObjectKind, outline: &[Vec2]);
}

/// Paint a snapshot: ship first, then asteroids, then bullets
pub fn paint<S: Surface + ?Sized>(snapshot: &Snapshot, surface: &mut S) {
    surface.begin(snapshot.bounds);
    for object in snapshot.objects() {
        surface.draw_outline(object.kind, &object.outline);
    }
}
