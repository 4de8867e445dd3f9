//! Inverse computation: target side lengths to vertex positions.

use super::types::{Sides, Triangle};
use super::GeometryError;
use crate::geometry::{distance, heading, law_of_cosines, polar_offset};

/// Reshape `current` so its sides match `target`.
///
/// Vertex A stays put and B keeps its heading from A (heading 0 if A and B
/// coincide). C has two mirror-image solutions about line AB; the one
/// strictly closer to the previous C is kept, otherwise the one rotated
/// clockwise from AB (negative angle). Keeping the nearer candidate stops
/// the triangle flipping while the user types.
///
/// Invalid targets are rejected and `current` is left untouched.
pub fn solve_from_sides(target: Sides, current: &Triangle) -> Result<Triangle, GeometryError> {
    target.validate()?;

    let a = current.a;
    let ab_heading = heading(&current.a, &current.b);
    let b = polar_offset(&a, ab_heading, target.c);

    let angle_a = law_of_cosines(target.b, target.c, target.a).acos();
    let ccw = polar_offset(&a, ab_heading + angle_a, target.b);
    let cw = polar_offset(&a, ab_heading - angle_a, target.b);

    let c = if distance(&ccw, &current.c) < distance(&cw, &current.c) {
        ccw
    } else {
        cw
    };

    Ok(Triangle { a, b, c })
}
