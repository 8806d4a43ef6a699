use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{magnitude_of, Point2, Tolerance, Vector2};

use super::Curve;

/// A bounded line segment from `p1` to `p2`.
///
/// The parametric form is `P(t) = p1 + t * (p2 - p1)` for `t` in `[0, 1]`.
/// A segment with `p1 == p2` is degenerate; it is a valid value, but
/// operations that need a direction treat it as having none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p1: Point2,
    pub p2: Point2,
}

impl LineSegment {
    /// Creates a segment between two points.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Returns the (non-normalized) direction `p2 - p1`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Returns the unit direction from `p1` to `p2`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the segment is degenerate.
    pub fn unit_direction(&self) -> Result<Vector2> {
        if self.is_degenerate() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self.direction().normalize())
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns `true` if the endpoints coincide within the default
    /// [`Tolerance`] scaled to the segment's coordinates.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        Tolerance::default().is_zero_length(&self.direction(), self.bounds_magnitude())
    }

    /// Largest absolute coordinate of either endpoint.
    #[must_use]
    pub fn bounds_magnitude(&self) -> f64 {
        magnitude_of(&[&self.p1, &self.p2])
    }

    /// Returns the minimum distance from `p` to this segment.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        point_to_segment_dist(p, &self.p1, &self.p2, &Tolerance::default())
    }
}

impl Curve for LineSegment {
    fn point_at(&self, t: f64) -> Point2 {
        // Exact endpoints; p1 + 1.0 * (p2 - p1) can differ from p2 by rounding.
        if t <= 0.0 {
            return self.p1;
        }
        if t >= 1.0 {
            return self.p2;
        }
        self.p1 + self.direction() * t
    }

    fn start(&self) -> Point2 {
        self.p1
    }

    fn end(&self) -> Point2 {
        self.p2
    }
}

impl From<(Point2, Point2)> for LineSegment {
    fn from((p1, p2): (Point2, Point2)) -> Self {
        Self::new(p1, p2)
    }
}
