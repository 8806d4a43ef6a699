use crate::geometry::LineSegment;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{Point2, Tolerance};

/// Where two segments cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCrossing {
    /// The crossing point.
    pub point: Point2,
    /// Parameter on the first segment, in `[0, 1]`.
    pub t: f64,
    /// Parameter on the second segment, in `[0, 1]`.
    pub u: f64,
}

/// Computes the transversal crossing of two bounded segments.
///
/// There is no crossing (`None`) when either segment is degenerate, when the
/// segments are parallel or collinear (even if they overlap), or when the
/// crossing of the supporting lines lies outside either segment. Touching at
/// an endpoint is a crossing.
#[derive(Debug)]
pub struct SegmentIntersect {
    a: LineSegment,
    b: LineSegment,
    tolerance: Tolerance,
}

impl SegmentIntersect {
    /// Creates a new `SegmentIntersect` query with the default tolerance.
    #[must_use]
    pub fn new(a: LineSegment, b: LineSegment) -> Self {
        Self {
            a,
            b,
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the epsilon policy.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Option<SegmentCrossing> {
        segment_segment_intersect_2d(
            &self.a.p1,
            &self.a.p2,
            &self.b.p1,
            &self.b.p2,
            &self.tolerance,
        )
        .map(|(point, t, u)| SegmentCrossing { point, t, u })
    }
}

/// Returns the point where `line1` and `line2` cross, if any.
///
/// See [`SegmentIntersect`] for the rules on parallel, collinear and
/// degenerate input.
#[must_use]
pub fn intersect(line1: &LineSegment, line2: &LineSegment) -> Option<Point2> {
    SegmentIntersect::new(*line1, *line2)
        .execute()
        .map(|crossing| crossing.point)
}
