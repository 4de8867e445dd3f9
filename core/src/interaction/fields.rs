//! Text values for the six numeric input fields.

use crate::triangle::{Angles, Measurements, Sides};
use serde::{Deserialize, Serialize};

/// Values to write into the input fields after a mutation.
///
/// `sides` is `None` when the side fields must be left alone because the
/// user is typing into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub sides: Option<[String; 3]>,
    pub angles: [String; 3],
}

impl FieldUpdate {
    /// Refresh of all six fields.
    pub fn all(m: &Measurements) -> Self {
        Self {
            sides: Some(side_fields(&m.sides)),
            angles: angle_fields(m.angles.as_ref()),
        }
    }

    /// Refresh of the angle fields only.
    pub fn angles_only(m: &Measurements) -> Self {
        Self {
            sides: None,
            angles: angle_fields(m.angles.as_ref()),
        }
    }
}

/// One-decimal display used by every numeric field.
pub fn format_field(value: f64) -> String {
    format!("{:.1}", value)
}

fn side_fields(sides: &Sides) -> [String; 3] {
    [format_field(sides.a), format_field(sides.b), format_field(sides.c)]
}

fn angle_fields(angles: Option<&Angles>) -> [String; 3] {
    match angles {
        Some(a) => [format_field(a.a), format_field(a.b), format_field(a.c)],
        None => [String::new(), String::new(), String::new()],
    }
}

/// Parse a side-length field. Surrounding whitespace is ignored.
pub fn parse_field(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
