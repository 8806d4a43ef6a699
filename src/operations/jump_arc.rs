use tracing::trace;

use crate::error::{OperationError, Result};
use crate::geometry::QuadBezier;
use crate::math::{is_finite, magnitude_of, Point2, Tolerance, Vector2};

/// Builds the quadratic detour a line takes to "jump" over a crossing line.
///
/// The chord runs from `start` to `end`. The control point sits at the chord
/// midpoint, displaced by `arc_height` along the chord's left normal
/// (the unit chord direction rotated +90°). A positive height bulges to the
/// left of `start → end`, a negative height to the right, and zero yields a
/// straight curve whose control point is the midpoint.
#[derive(Debug)]
pub struct JumpArc {
    start: Point2,
    end: Point2,
    arc_height: f64,
    tolerance: Tolerance,
}

impl JumpArc {
    /// Creates a new jump arc operation with the default tolerance.
    #[must_use]
    pub fn new(start: Point2, end: Point2, arc_height: f64) -> Self {
        Self {
            start,
            end,
            arc_height,
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the epsilon used for the zero-length chord check.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the operation.
    ///
    /// The returned curve's `start` and `end` are exactly the input points.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the chord has zero length or
    /// any input is not finite.
    pub fn execute(&self) -> Result<QuadBezier> {
        if !is_finite(&self.start) || !is_finite(&self.end) || !self.arc_height.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "non-finite jump arc input: ({}, {}) -> ({}, {}), height {}",
                self.start.x, self.start.y, self.end.x, self.end.y, self.arc_height
            ))
            .into());
        }

        let chord = self.end - self.start;
        let magnitude = magnitude_of(&[&self.start, &self.end]);
        if self.tolerance.is_zero_length(&chord, magnitude) {
            return Err(OperationError::InvalidInput(format!(
                "zero-length jump arc chord at ({}, {})",
                self.start.x, self.start.y
            ))
            .into());
        }

        let dir = chord / chord.norm();
        let normal = Vector2::new(-dir.y, dir.x);
        let mid = nalgebra::center(&self.start, &self.end);
        let control = mid + normal * self.arc_height;
        trace!(?control, height = self.arc_height, "jump arc control point");

        Ok(QuadBezier::new(self.start, control, self.end))
    }
}

/// Creates the jump arc over the chord `start → end` with the given bulge height.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if `start` and `end` coincide.
pub fn create_jump_arc(start: Point2, end: Point2, arc_height: f64) -> Result<QuadBezier> {
    JumpArc::new(start, end, arc_height).execute()
}
