//! Pure 2D geometry for freehand canvas strokes.
//!
//! - [`intersect`] finds where two segments cross.
//! - [`create_jump_arc`] builds the quadratic detour drawn over a crossing.
//! - [`simplify`] reduces a dense stroke with Douglas–Peucker.
//! - [`operations::JumpSplice`] ties the three together for a whole stroke.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, StrokeGeomError};
pub use operations::{create_jump_arc, intersect, simplify};
