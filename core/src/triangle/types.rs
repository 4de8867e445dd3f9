use crate::geometry::{Point2, EPSILON};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeometryError;

/// One of the three labelled vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexId {
    A,
    B,
    C,
}

impl VertexId {
    /// Fixed iteration order used by hit testing; the first hit wins.
    pub const ALL: [VertexId; 3] = [VertexId::A, VertexId::B, VertexId::C];
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// The three vertex positions. Owned by the interaction controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    pub fn vertex(&self, id: VertexId) -> Point2 {
        match id {
            VertexId::A => self.a,
            VertexId::B => self.b,
            VertexId::C => self.c,
        }
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Point2 {
        match id {
            VertexId::A => &mut self.a,
            VertexId::B => &mut self.b,
            VertexId::C => &mut self.c,
        }
    }
}

impl Default for Triangle {
    /// Start-up layout in canvas pixels (y grows downwards).
    fn default() -> Self {
        Self {
            a: Point2::new(300.0, 100.0),
            b: Point2::new(150.0, 300.0),
            c: Point2::new(450.0, 300.0),
        }
    }
}

/// Side lengths, each named after the vertex it faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Sides {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Checks the sides describe a real, non-degenerate triangle.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (label, value) in [('a', self.a), ('b', self.b), ('c', self.c)] {
            if !value.is_finite() {
                return Err(GeometryError::NotFinite(label));
            }
            if value <= 0.0 {
                return Err(GeometryError::NonPositive(label, value));
            }
        }
        if !self.perimeter().is_finite() {
            return Err(GeometryError::Overflow);
        }
        let Sides { a, b, c } = *self;
        if a + b <= c || a + c <= b || b + c <= a {
            return Err(GeometryError::TriangleInequality(a, b, c));
        }
        Ok(())
    }

    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    pub fn semi_perimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }

    /// True when any side is too short to carry an angle.
    pub fn is_degenerate(&self) -> bool {
        self.a < EPSILON || self.b < EPSILON || self.c < EPSILON
    }
}

/// Interior angles in degrees, named after their vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
}

impl Angles {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn sum(&self) -> f64 {
        self.a + self.b + self.c
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
}

/// Derived snapshot of a triangle. Never stored, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub sides: Sides,
    /// `None` when a side has collapsed to zero length and the angles
    /// are undefined.
    pub angles: Option<Angles>,
}
