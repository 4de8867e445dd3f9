use super::controller::{Controller, DragState};
use super::hit::Cursor;
use crate::geometry::{ApproxEq, Point2, Vector2};
use crate::triangle::{Triangle, VertexId};

#[test]
fn test_initial_refresh_fills_all_fields() {
    let controller = Controller::default();
    let update = controller.initial_refresh();
    let sides = update.sides.expect("Initial refresh includes sides");
    // |BC| = 300, |AC| = |AB| = 250
    assert_eq!(sides, ["300.0".to_string(), "250.0".to_string(), "250.0".to_string()]);
    assert!(update.angles.iter().all(|a| !a.is_empty()));
}

#[test]
fn test_pointer_down_on_vertex_starts_drag() {
    let mut controller = Controller::default();
    let feedback = controller.pointer_down(Point2::new(305.0, 103.0));

    assert_eq!(feedback.cursor, Some(Cursor::Grabbing));
    assert!(feedback.update.is_none());
    match controller.drag_state() {
        DragState::Dragging { vertex, offset } => {
            assert_eq!(vertex, VertexId::A);
            assert!(offset.approx_eq(&Vector2::new(5.0, 3.0)));
        }
        DragState::Idle => panic!("Expected drag to start"),
    }
}

#[test]
fn test_pointer_down_miss_stays_idle() {
    let mut controller = Controller::default();
    let feedback = controller.pointer_down(Point2::new(0.0, 0.0));
    assert_eq!(controller.drag_state(), DragState::Idle);
    assert!(feedback.cursor.is_none());
}

#[test]
fn test_drag_keeps_offset() {
    let mut controller = Controller::default();
    controller.pointer_down(Point2::new(305.0, 103.0));
    let feedback = controller.pointer_move(Point2::new(405.0, 203.0));

    assert!(controller.triangle().a.approx_eq(&Point2::new(400.0, 200.0)));
    let update = feedback.update.expect("Drag refreshes fields");
    assert!(update.sides.is_some(), "Drag refreshes side fields too");
}

#[test]
fn test_drag_moves_only_grabbed_vertex() {
    let mut controller = Controller::default();
    let before = *controller.triangle();
    let sides_before = controller.measurements().sides;

    controller.pointer_down(before.a);
    controller.pointer_move(Point2::new(320.0, 40.0));
    controller.pointer_up();

    let after = *controller.triangle();
    assert!(after.a.approx_eq(&Point2::new(320.0, 40.0)));
    assert_eq!(after.b, before.b);
    assert_eq!(after.c, before.c);

    let sides_after = controller.measurements().sides;
    assert!((sides_after.a - sides_before.a).abs() < 1e-12);
    assert!((sides_after.b - sides_before.b).abs() > 1.0);
    assert!((sides_after.c - sides_before.c).abs() > 1.0);
}

#[test]
fn test_pointer_up_and_leave_end_drag() {
    let mut controller = Controller::default();
    controller.pointer_down(Triangle::default().b);
    assert_eq!(controller.pointer_up().cursor, Some(Cursor::Crosshair));
    assert_eq!(controller.drag_state(), DragState::Idle);

    controller.pointer_down(Triangle::default().c);
    controller.pointer_leave();
    assert_eq!(controller.drag_state(), DragState::Idle);

    // Moves after release no longer drag
    let before = *controller.triangle();
    let feedback = controller.pointer_move(Point2::new(10.0, 10.0));
    assert!(feedback.update.is_none());
    assert_eq!(*controller.triangle(), before);
}

#[test]
fn test_idle_hover_cursor() {
    let mut controller = Controller::default();
    assert_eq!(controller.pointer_move(Point2::new(452.0, 298.0)).cursor, Some(Cursor::Grab));
    assert_eq!(controller.pointer_move(Point2::new(10.0, 10.0)).cursor, Some(Cursor::Crosshair));
    assert_eq!(controller.drag_state(), DragState::Idle);
}

#[test]
fn test_edit_sides_refreshes_angles_only() {
    let mut controller = Controller::default();
    let update = controller.edit_sides("200", "200", "200").expect("Valid triangle");

    assert!(update.sides.is_none(), "Side fields being edited are not echoed");
    assert_eq!(update.angles, ["60.0".to_string(), "60.0".to_string(), "60.0".to_string()]);

    let sides = controller.measurements().sides;
    assert!((sides.a - 200.0).abs() < 1e-6);
}

#[test]
fn test_edit_sides_rejects_inequality() {
    let mut controller = Controller::default();
    let before = *controller.triangle();

    assert!(controller.edit_sides("1", "1", "10").is_none());
    assert_eq!(*controller.triangle(), before);
}

#[test]
fn test_edit_sides_ignores_garbage() {
    let mut controller = Controller::default();
    let before = *controller.triangle();

    assert!(controller.edit_sides("", "250", "250").is_none());
    assert!(controller.edit_sides("abc", "250", "250").is_none());
    assert!(controller.edit_sides("-5", "250", "250").is_none());
    assert!(controller.edit_sides("0", "250", "250").is_none());
    assert_eq!(*controller.triangle(), before);
}

#[test]
fn test_edit_with_current_values_keeps_shape() {
    let mut controller = Controller::default();
    let before = *controller.triangle();
    controller.edit_sides("300", "250", "250").expect("Current sides are valid");

    let after = controller.triangle();
    assert!(after.b.approx_eq(&before.b));
    assert!(after.c.approx_eq(&before.c));
}

#[test]
fn test_edit_huge_equilateral_stays_finite() {
    let mut controller = Controller::default();
    let update = controller.edit_sides("1e200", "1e200", "1e200").expect("Valid triangle");

    assert_eq!(update.angles, ["60.0".to_string(), "60.0".to_string(), "60.0".to_string()]);
    let t = controller.triangle();
    for p in [t.a, t.b, t.c] {
        assert!(p.x.is_finite() && p.y.is_finite(), "{:?} is not finite", p);
    }
}

#[test]
fn test_edit_overflowing_sides_rejected() {
    let mut controller = Controller::default();
    let before = *controller.triangle();
    assert!(controller.edit_sides("1e308", "1e308", "1e308").is_none());
    assert_eq!(*controller.triangle(), before);
}
