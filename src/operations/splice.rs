use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{LineSegment, PathSegment, StrokePath};
use crate::math::{Point2, Tolerance};

use super::intersect::SegmentIntersect;
use super::jump_arc::JumpArc;

/// Shape of the jump drawn at every crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpStyle {
    /// Half-width of the neighborhood cut out around a crossing, along the stroke.
    pub radius: f64,
    /// Signed bulge of a full-width jump arc; positive bulges left of the
    /// drawing direction. A cut shrunk below `radius` scales the bulge by the
    /// same factor, keeping every jump the same shape.
    pub height: f64,
}

impl Default for JumpStyle {
    fn default() -> Self {
        Self {
            radius: 6.0,
            height: 6.0,
        }
    }
}

/// A point where a stroke crosses another stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeCrossing {
    /// Index of the stroke segment `stroke[segment] → stroke[segment + 1]`.
    pub segment: usize,
    /// Parameter along that segment, in `[0, 1]`.
    pub t: f64,
    /// The crossing point.
    pub point: Point2,
}

/// Finds every crossing of `stroke` with the segments of `others`.
///
/// Results are sorted by segment, then by position along the segment. A
/// crossing found twice at the same spot (the other stroke passing through
/// one of its own vertices) is reported once.
#[must_use]
pub fn find_crossings<S: AsRef<[Point2]>>(stroke: &[Point2], others: &[S]) -> Vec<StrokeCrossing> {
    crossings_with(stroke, others, &Tolerance::default())
}

fn crossings_with<S: AsRef<[Point2]>>(
    stroke: &[Point2],
    others: &[S],
    tolerance: &Tolerance,
) -> Vec<StrokeCrossing> {
    let mut crossings = Vec::new();

    for (segment, w) in stroke.windows(2).enumerate() {
        let own = LineSegment::new(w[0], w[1]);
        for other in others {
            for o in other.as_ref().windows(2) {
                let query =
                    SegmentIntersect::new(own, LineSegment::new(o[0], o[1])).with_tolerance(*tolerance);
                if let Some(hit) = query.execute() {
                    crossings.push(StrokeCrossing {
                        segment,
                        t: hit.t,
                        point: hit.point,
                    });
                }
            }
        }
    }

    crossings.sort_by(|a, b| a.segment.cmp(&b.segment).then(a.t.total_cmp(&b.t)));
    crossings.dedup_by(|b, a| {
        a.segment == b.segment
            && (a.point - b.point).norm() <= tolerance.scaled(a.point.x.abs().max(a.point.y.abs()))
    });
    crossings
}

/// Rebuilds a stroke as a drawable path that jumps over every crossing with
/// other strokes.
///
/// Around each crossing the neighborhood `[point - r, point + r]` along the
/// stroke segment is replaced by a jump arc. The cut is shrunk symmetrically
/// so it stays on its segment and clear of neighboring jumps, and the arc height
/// shrinks with it; a crossing with no room left (e.g. exactly on a stroke
/// vertex) is drawn straight.
///
/// The result is contiguous, starts at the first stroke point and ends at
/// the last.
#[derive(Debug)]
pub struct JumpSplice<'a, S> {
    stroke: &'a [Point2],
    others: &'a [S],
    style: JumpStyle,
    tolerance: Tolerance,
}

impl<'a, S: AsRef<[Point2]>> JumpSplice<'a, S> {
    /// Creates a new splice operation with the default style and tolerance.
    #[must_use]
    pub fn new(stroke: &'a [Point2], others: &'a [S]) -> Self {
        Self {
            stroke,
            others,
            style: JumpStyle::default(),
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the jump style.
    #[must_use]
    pub fn with_style(mut self, style: JumpStyle) -> Self {
        self.style = style;
        self
    }

    /// Overrides the epsilon policy.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the splice.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the stroke has fewer than 2 points
    /// - `OperationError::InvalidArgument` if the style radius is not positive
    ///   or the height is not finite
    pub fn execute(&self) -> Result<StrokePath> {
        if self.stroke.len() < 2 {
            return Err(OperationError::InvalidInput(
                "at least 2 points are required to splice jump arcs".to_owned(),
            )
            .into());
        }
        if !self.style.radius.is_finite() || self.style.radius <= 0.0 {
            return Err(OperationError::InvalidArgument {
                name: "radius",
                value: self.style.radius,
                reason: "must be positive and finite",
            }
            .into());
        }
        if !self.style.height.is_finite() {
            return Err(OperationError::InvalidArgument {
                name: "height",
                value: self.style.height,
                reason: "must be finite",
            }
            .into());
        }

        let crossings = crossings_with(self.stroke, self.others, &self.tolerance);
        let mut path = StrokePath::new();
        let mut cursor = self.stroke[0];
        let mut pending = crossings.iter().peekable();
        let mut skipped = 0_usize;

        for (i, w) in self.stroke.windows(2).enumerate() {
            let (a, b) = (w[0], w[1]);
            let seg = LineSegment::new(a, b);
            let eps = self.tolerance.scaled(seg.bounds_magnitude());
            let len = seg.length();

            let here: Vec<&StrokeCrossing> =
                std::iter::from_fn(|| pending.next_if(|c| c.segment == i)).collect();
            if len <= eps {
                // Zero-length step; any crossing on it has nowhere to jump.
                skipped += here.len();
                continue;
            }

            let dir = seg.direction() / len;
            // Distance along the segment already drawn.
            let mut drawn = 0.0_f64;

            for (k, crossing) in here.iter().enumerate() {
                let at = crossing.t * len;
                // Split the gap to the next crossing evenly between both jumps.
                let room_ahead = here
                    .get(k + 1)
                    .map_or(len - at, |next| (next.t * len - at) * 0.5);
                let half = self.style.radius.min(at - drawn).min(room_ahead);
                if half <= eps {
                    debug!(segment = i, point = ?crossing.point, "no room for jump arc");
                    skipped += 1;
                    continue;
                }

                let start = if at - half <= drawn + eps {
                    cursor
                } else {
                    a + dir * (at - half)
                };
                let end = if at + half >= len - eps {
                    b
                } else {
                    a + dir * (at + half)
                };

                if start != cursor {
                    path.push(PathSegment::Line(LineSegment::new(cursor, start)));
                }
                let height = self.style.height * (half / self.style.radius);
                let arc = JumpArc::new(start, end, height)
                    .with_tolerance(self.tolerance)
                    .execute()?;
                path.push(PathSegment::Quad(arc));

                cursor = end;
                drawn = at + half;
            }

            if cursor != b {
                path.push(PathSegment::Line(LineSegment::new(cursor, b)));
                cursor = b;
            }
        }

        if path.is_empty() {
            // Every step was zero-length.
            path.push(PathSegment::Line(LineSegment::new(
                self.stroke[0],
                self.stroke[self.stroke.len() - 1],
            )));
        }

        debug!(
            crossings = crossings.len(),
            jumps = path.quad_count(),
            skipped,
            "spliced jump arcs"
        );
        Ok(path)
    }
}
