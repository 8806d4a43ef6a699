mod quad_bezier;
mod segment;
mod stroke_path;

pub use quad_bezier::QuadBezier;
pub use segment::LineSegment;
pub use stroke_path::{PathSegment, StrokePath};

use crate::math::Point2;

/// Trait for bounded parametric curves in the canvas plane.
///
/// The parameter `t` runs over `[0, 1]`, with `point_at(0.0) == start()` and
/// `point_at(1.0) == end()` exactly.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Returns the first point of the curve.
    fn start(&self) -> Point2;

    /// Returns the last point of the curve.
    fn end(&self) -> Point2;
}
