//! Vertex hit detection for pointer input.

use crate::geometry::{distance, Point2};
use crate::triangle::{Triangle, VertexId};
use serde::{Deserialize, Serialize};

/// Pointer cursor affordance shown over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cursor {
    /// Default canvas cursor
    Crosshair,
    /// Hovering a vertex while idle
    Grab,
    /// A vertex is being dragged
    Grabbing,
}

/// Configuration for vertex hit detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitConfig {
    /// Radius of the drawn vertex marker, in canvas pixels
    pub vertex_radius: f64,
}

impl HitConfig {
    /// Hit radius is twice the drawn radius so small markers stay easy to grab.
    pub fn hit_radius(&self) -> f64 {
        self.vertex_radius * 2.0
    }
}

impl Default for HitConfig {
    fn default() -> Self {
        Self { vertex_radius: 8.0 }
    }
}

/// First vertex (in A, B, C order) strictly within the hit radius of `pointer`.
pub fn find_vertex_at(pointer: Point2, triangle: &Triangle, config: &HitConfig) -> Option<VertexId> {
    let radius = config.hit_radius();
    VertexId::ALL
        .into_iter()
        .find(|id| distance(&pointer, &triangle.vertex(*id)) < radius)
}
