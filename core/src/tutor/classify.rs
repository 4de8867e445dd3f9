//! Side- and angle-based triangle classification.

use crate::triangle::{Angles, Sides};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute tolerance for "equal" sides and for "is 90 degrees".
pub const CLASSIFY_TOLERANCE: f64 = 0.1;

fn is_close(x: f64, y: f64) -> bool {
    (x - y).abs() < CLASSIFY_TOLERANCE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideClass {
    Equilateral,
    Isosceles,
    Scalene,
}

impl SideClass {
    pub fn of(sides: &Sides) -> Self {
        let Sides { a, b, c } = *sides;
        if is_close(a, b) && is_close(b, c) {
            Self::Equilateral
        } else if is_close(a, b) || is_close(b, c) || is_close(a, c) {
            Self::Isosceles
        } else {
            Self::Scalene
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::Equilateral => "All sides are equal -> Equilateral",
            Self::Isosceles => "Two sides are equal -> Isosceles",
            Self::Scalene => "No sides are equal -> Scalene",
        }
    }
}

impl fmt::Display for SideClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equilateral => write!(f, "Equilateral"),
            Self::Isosceles => write!(f, "Isosceles"),
            Self::Scalene => write!(f, "Scalene"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleClass {
    Right,
    Obtuse,
    Acute,
}

impl AngleClass {
    pub fn of(angles: &Angles) -> Self {
        let all = angles.as_array();
        if all.iter().any(|a| is_close(*a, 90.0)) {
            Self::Right
        } else if all.iter().any(|a| *a > 90.0) {
            Self::Obtuse
        } else {
            Self::Acute
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::Right => "One angle is 90° -> Right",
            Self::Obtuse => "One angle is > 90° -> Obtuse",
            Self::Acute => "All angles are < 90° -> Acute",
        }
    }
}

impl fmt::Display for AngleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => write!(f, "Right"),
            Self::Obtuse => write!(f, "Obtuse"),
            Self::Acute => write!(f, "Acute"),
        }
    }
}
