pub mod distance_2d;
pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Base epsilon for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Epsilon policy shared by every operation.
///
/// The effective epsilon for a computation is `max(absolute, relative * magnitude)`,
/// where `magnitude` is the largest coordinate size involved. Strokes drawn at
/// canvas scale (hundreds to thousands of units) therefore get a proportionally
/// wider band than unit-scale input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Lower bound on the epsilon, independent of input size.
    pub absolute: f64,
    /// Epsilon per unit of input magnitude. Also the smallest sine of a
    /// crossing angle that is not treated as parallel.
    pub relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: TOLERANCE,
            relative: TOLERANCE,
        }
    }
}

impl Tolerance {
    /// Returns the epsilon for input whose coordinates are bounded by `magnitude`.
    #[must_use]
    pub fn scaled(&self, magnitude: f64) -> f64 {
        self.absolute.max(self.relative * magnitude.abs())
    }

    /// Returns `true` if `v` is shorter than the scaled epsilon.
    #[must_use]
    pub fn is_zero_length(&self, v: &Vector2, magnitude: f64) -> bool {
        v.norm() <= self.scaled(magnitude)
    }
}

/// Largest absolute coordinate among `points`, used to scale tolerances.
#[must_use]
pub fn magnitude_of(points: &[&Point2]) -> f64 {
    points
        .iter()
        .fold(0.0_f64, |acc, p| acc.max(p.x.abs()).max(p.y.abs()))
}

/// Returns `true` if both coordinates are finite.
#[must_use]
pub fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
