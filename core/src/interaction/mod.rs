//! Pointer and side-field handling for the triangle canvas.
//!
//! The [`Controller`] is the only writer of vertex positions. Every mutating
//! call hands back the field values the UI should display, so the caller
//! never reads geometry out of band.

pub mod hit;
pub mod fields;
pub mod controller;

#[cfg(test)]
mod tests_controller;

pub use controller::{Controller, DragState, Feedback};
pub use fields::{format_field, parse_field, FieldUpdate};
pub use hit::{Cursor, HitConfig};
