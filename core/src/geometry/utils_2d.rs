//! 2D plane helpers shared by the triangle engine and the pointer hit test.
//!
//! Everything here is pure: no allocation, no state.

use super::{Point2, Vector2};

/// Euclidean distance between two points. Uses `hypot` so far-apart points
/// do not overflow through their squared distance.
#[inline]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    let d = *p2 - *p1;
    d.x.hypot(d.y)
}

/// Heading of the vector `from -> to` in radians, measured from +X.
/// Returns 0 when the two points coincide exactly.
pub fn heading(from: &Point2, to: &Point2) -> f64 {
    let d = *to - *from;
    if d == Vector2::zeros() {
        return 0.0;
    }
    d.y.atan2(d.x)
}

/// Point at `length` from `origin` along `angle` (radians).
#[inline]
pub fn polar_offset(origin: &Point2, angle: f64, length: f64) -> Point2 {
    *origin + Vector2::new(length * angle.cos(), length * angle.sin())
}

/// Cosine of the angle opposite `opposite`, given the two adjacent sides.
///
/// Law of Cosines, clamped to [-1, 1] so that rounding drift never pushes
/// `acos` out of its domain. Lengths are divided by the longest one first,
/// so huge sides cannot overflow their squares into `inf - inf`.
pub fn law_of_cosines(adjacent1: f64, adjacent2: f64, opposite: f64) -> f64 {
    let scale = adjacent1.max(adjacent2).max(opposite);
    let (x, y, z) = (adjacent1 / scale, adjacent2 / scale, opposite / scale);
    let cos = (x * x + y * y - z * z) / (2.0 * x * y);
    cos.clamp(-1.0, 1.0)
}
