//! Rule-based geometry tutor.
//!
//! Free text is reduced to a [`Query`] first, then answered from the current
//! sides and angles. No state, no learning: the same inputs always give the
//! same [`TutorAnswer`].

pub mod query;
pub mod classify;
pub mod answer;
pub mod wire;


pub use answer::{answer, solve};
pub use classify::{AngleClass, SideClass};
pub use query::Query;
pub use wire::{ChatRequest, TutorAnswer};
