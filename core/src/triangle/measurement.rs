//! Forward computation: vertex positions to sides and angles.

use super::types::{Angles, Measurements, Sides, Triangle};
use crate::geometry::{distance, law_of_cosines};

/// Measure the three sides of a triangle.
pub fn measure_sides(triangle: &Triangle) -> Sides {
    Sides {
        a: distance(&triangle.b, &triangle.c),
        b: distance(&triangle.a, &triangle.c),
        c: distance(&triangle.a, &triangle.b),
    }
}

/// Interior angles (degrees) from side lengths.
///
/// Returns `None` if any side is degenerate, since the Law of Cosines would
/// divide by a zero-length side.
pub fn angles_from_sides(sides: &Sides) -> Option<Angles> {
    if sides.is_degenerate() {
        return None;
    }
    let Sides { a, b, c } = *sides;
    Some(Angles {
        a: law_of_cosines(b, c, a).acos().to_degrees(),
        b: law_of_cosines(a, c, b).acos().to_degrees(),
        c: law_of_cosines(a, b, c).acos().to_degrees(),
    })
}

/// Full geometry snapshot of the triangle.
pub fn measure(triangle: &Triangle) -> Measurements {
    let sides = measure_sides(triangle);
    Measurements {
        sides,
        angles: angles_from_sides(&sides),
    }
}
