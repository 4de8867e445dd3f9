//! Triangle geometry engine.
//!
//! Forward direction: three vertices to side lengths and interior angles.
//! Inverse direction: three target side lengths plus the current triangle
//! to new vertex positions.

pub mod types;
pub mod measurement;
pub mod solve;

#[cfg(test)]
mod tests_solve;

pub use measurement::measure;
pub use solve::solve_from_sides;
pub use types::{Angles, Measurements, Sides, Triangle, VertexId};

use thiserror::Error;

/// Reasons a set of target side lengths cannot form a triangle.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Side {0} is not a finite number")]
    NotFinite(char),

    #[error("Side {0} must be positive, got {1}")]
    NonPositive(char, f64),

    #[error("Sides are too large to place on the canvas")]
    Overflow,

    #[error("Sides {0}, {1}, {2} violate the triangle inequality")]
    TriangleInequality(f64, f64, f64),
}
