use super::measurement::measure;
use super::solve::solve_from_sides;
use super::types::{Sides, Triangle};
use super::GeometryError;
use crate::geometry::{ApproxEq, Point2};

#[test]
fn test_solve_with_current_sides_is_identity() {
    let current = Triangle::default();
    let sides = measure(&current).sides;

    let solved = solve_from_sides(sides, &current).expect("Current sides are valid");
    assert!(solved.a.approx_eq(&current.a));
    assert!(solved.b.approx_eq(&current.b));
    assert!(solved.c.approx_eq(&current.c));
}

#[test]
fn test_solve_identity_both_orientations() {
    // C on either side of AB must be reproduced, not mirrored
    let above = Triangle::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), Point2::new(3.0, 4.0));
    let below = Triangle::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), Point2::new(3.0, -4.0));
    for current in [above, below] {
        let solved = solve_from_sides(measure(&current).sides, &current).expect("Valid");
        assert!(solved.c.approx_eq(&current.c), "{:?} != {:?}", solved.c, current.c);
    }
}

#[test]
fn test_solve_hits_target_sides() {
    let current = Triangle::default();
    let target = Sides::new(120.0, 200.0, 180.0);
    let solved = solve_from_sides(target, &current).expect("Valid target");

    let sides = measure(&solved).sides;
    assert!((sides.a - 120.0).abs() < 1e-6);
    assert!((sides.b - 200.0).abs() < 1e-6);
    assert!((sides.c - 180.0).abs() < 1e-6);
}

#[test]
fn test_solve_keeps_a_and_ab_heading() {
    let current = Triangle::default();
    let solved = solve_from_sides(Sides::new(300.0, 250.0, 100.0), &current).expect("Valid");

    assert_eq!(solved.a, current.a);
    let before = (current.b - current.a).normalize();
    let after = (solved.b - solved.a).normalize();
    assert!(before.approx_eq(&after));
}

#[test]
fn test_solve_picks_candidate_near_previous_c() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(4.0, 0.0);
    let target = Sides::new(5.0, 3.0, 4.0);

    let up = solve_from_sides(target, &Triangle::new(a, b, Point2::new(1.0, 10.0))).expect("Valid");
    assert!(up.c.approx_eq(&Point2::new(0.0, 3.0)));

    let down = solve_from_sides(target, &Triangle::new(a, b, Point2::new(1.0, -10.0))).expect("Valid");
    assert!(down.c.approx_eq(&Point2::new(0.0, -3.0)));
}

#[test]
fn test_solve_tie_break_is_stable() {
    // Previous C on line AB: both candidates are equally far away
    let current = Triangle::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(2.0, 0.0));
    let target = Sides::new(5.0, 3.0, 4.0);

    let first = solve_from_sides(target, &current).expect("Valid");
    for _ in 0..5 {
        let again = solve_from_sides(target, &current).expect("Valid");
        assert_eq!(first, again);
    }
    // Ties resolve to the clockwise candidate
    assert!(first.c.approx_eq(&Point2::new(0.0, -3.0)));
}

#[test]
fn test_solve_coincident_a_b_uses_zero_heading() {
    let p = Point2::new(50.0, 50.0);
    let current = Triangle::new(p, p, Point2::new(60.0, 80.0));
    let solved = solve_from_sides(Sides::new(5.0, 3.0, 4.0), &current).expect("Valid");
    assert!(solved.b.approx_eq(&Point2::new(54.0, 50.0)));
}

#[test]
fn test_solve_rejects_triangle_inequality() {
    let current = Triangle::default();
    let result = solve_from_sides(Sides::new(1.0, 1.0, 10.0), &current);
    assert_eq!(result, Err(GeometryError::TriangleInequality(1.0, 1.0, 10.0)));

    // Degenerate equality is rejected too
    assert!(solve_from_sides(Sides::new(1.0, 2.0, 3.0), &current).is_err());
}

#[test]
fn test_solve_rejects_non_positive_and_nan() {
    let current = Triangle::default();
    assert_eq!(
        solve_from_sides(Sides::new(0.0, 3.0, 4.0), &current),
        Err(GeometryError::NonPositive('a', 0.0))
    );
    assert_eq!(
        solve_from_sides(Sides::new(3.0, -4.0, 4.0), &current),
        Err(GeometryError::NonPositive('b', -4.0))
    );
    assert_eq!(
        solve_from_sides(Sides::new(3.0, 4.0, f64::NAN), &current),
        Err(GeometryError::NotFinite('c'))
    );
}

#[test]
fn test_solve_rejects_overflowing_perimeter() {
    let huge = f64::MAX / 2.0;
    assert_eq!(
        solve_from_sides(Sides::new(huge, huge, huge), &Triangle::default()),
        Err(GeometryError::Overflow)
    );
}
