use super::fields::{parse_field, FieldUpdate};
use super::hit::{find_vertex_at, Cursor, HitConfig};
use crate::geometry::{Point2, Vector2};
use crate::triangle::{measure, solve_from_sides, Measurements, Sides, Triangle, VertexId};

/// Drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// `offset` is pointer minus vertex at grab time, so the vertex keeps its
    /// distance to the pointer instead of snapping under it.
    Dragging { vertex: VertexId, offset: Vector2 },
}

/// What the UI should do after a pointer event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feedback {
    /// New cursor, if it changed
    pub cursor: Option<Cursor>,
    /// New field values; a redraw is due whenever this is set
    pub update: Option<FieldUpdate>,
}

impl Feedback {
    fn cursor(cursor: Cursor) -> Self {
        Self { cursor: Some(cursor), update: None }
    }
}

/// Owner of the triangle and the drag gesture.
#[derive(Debug, Clone)]
pub struct Controller {
    triangle: Triangle,
    drag: DragState,
    config: HitConfig,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Triangle::default())
    }
}

impl Controller {
    pub fn new(triangle: Triangle) -> Self {
        Self::with_config(triangle, HitConfig::default())
    }

    pub fn with_config(triangle: Triangle, config: HitConfig) -> Self {
        Self {
            triangle,
            drag: DragState::Idle,
            config,
        }
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn measurements(&self) -> Measurements {
        measure(&self.triangle)
    }

    /// Field values for the first paint.
    pub fn initial_refresh(&self) -> FieldUpdate {
        FieldUpdate::all(&self.measurements())
    }

    pub fn pointer_down(&mut self, pointer: Point2) -> Feedback {
        if self.drag != DragState::Idle {
            return Feedback::default();
        }
        match find_vertex_at(pointer, &self.triangle, &self.config) {
            Some(vertex) => {
                let offset = pointer - self.triangle.vertex(vertex);
                self.drag = DragState::Dragging { vertex, offset };
                Feedback::cursor(Cursor::Grabbing)
            }
            None => Feedback::default(),
        }
    }

    pub fn pointer_move(&mut self, pointer: Point2) -> Feedback {
        match self.drag {
            DragState::Dragging { vertex, offset } => {
                *self.triangle.vertex_mut(vertex) = pointer - offset;
                Feedback {
                    cursor: None,
                    update: Some(FieldUpdate::all(&self.measurements())),
                }
            }
            DragState::Idle => {
                let hovering = find_vertex_at(pointer, &self.triangle, &self.config).is_some();
                Feedback::cursor(if hovering { Cursor::Grab } else { Cursor::Crosshair })
            }
        }
    }

    pub fn pointer_up(&mut self) -> Feedback {
        self.drag = DragState::Idle;
        Feedback::cursor(Cursor::Crosshair)
    }

    /// Pointer left the canvas: ends any drag, same as releasing.
    pub fn pointer_leave(&mut self) -> Feedback {
        self.pointer_up()
    }

    /// Apply raw side-field text.
    ///
    /// Returns `None`, leaving the triangle untouched, if any field does not
    /// parse or the lengths cannot form a triangle. On success only the
    /// angle fields are refreshed.
    pub fn edit_sides(&mut self, a: &str, b: &str, c: &str) -> Option<FieldUpdate> {
        let target = Sides::new(parse_field(a)?, parse_field(b)?, parse_field(c)?);
        self.set_sides(target)
    }

    /// Numeric form of [`Controller::edit_sides`].
    pub fn set_sides(&mut self, target: Sides) -> Option<FieldUpdate> {
        let solved = solve_from_sides(target, &self.triangle).ok()?;
        self.triangle = solved;
        Some(FieldUpdate::angles_only(&self.measurements()))
    }
}
