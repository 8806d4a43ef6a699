use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::distance_2d::point_to_line_dist;
use crate::math::{is_finite, Point2, Tolerance};

/// Reduces a dense stroke with the Douglas–Peucker algorithm.
///
/// For a range `[first, last]` the interior point farthest (perpendicular
/// distance) from the chord `points[first] → points[last]` is kept if its
/// distance exceeds `tolerance`, and both halves are processed in turn.
/// Otherwise every interior point of the range is dropped. A chord whose ends
/// coincide within the epsilon policy (closed or doubled-back strokes) measures
/// plain Euclidean distance from that point instead.
///
/// Ranges are processed from an explicit work stack, so stroke length is not
/// limited by call-stack depth.
///
/// # Output
///
/// An order-preserving subsequence of the input that always includes the
/// first and last point. Running the simplifier again on its own output with
/// the same tolerance returns that output unchanged.
#[derive(Debug)]
pub struct SimplifyPath<'a> {
    points: &'a [Point2],
    tolerance: f64,
    epsilon: Tolerance,
}

impl<'a> SimplifyPath<'a> {
    /// Creates a new simplification operation.
    #[must_use]
    pub fn new(points: &'a [Point2], tolerance: f64) -> Self {
        Self {
            points,
            tolerance,
            epsilon: Tolerance::default(),
        }
    }

    /// Overrides the epsilon policy used to detect zero-length chords.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: Tolerance) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Executes the simplification.
    ///
    /// Inputs of 0, 1 or 2 points are returned unchanged.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidArgument` if `tolerance` is not a positive
    ///   finite number
    /// - `OperationError::InvalidInput` if any point has a NaN or infinite
    ///   coordinate
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(OperationError::InvalidArgument {
                name: "tolerance",
                value: self.tolerance,
                reason: "must be positive and finite",
            }
            .into());
        }
        if let Some(i) = self.points.iter().position(|p| !is_finite(p)) {
            return Err(OperationError::InvalidInput(format!(
                "point {i} has a non-finite coordinate"
            ))
            .into());
        }

        let n = self.points.len();
        if n <= 2 {
            return Ok(self.points.to_vec());
        }

        let keep = self.mark_kept();
        let simplified: Vec<Point2> = self
            .points
            .iter()
            .zip(&keep)
            .filter_map(|(p, &k)| k.then_some(*p))
            .collect();

        debug!(
            input = n,
            output = simplified.len(),
            tolerance = self.tolerance,
            "simplified stroke"
        );
        Ok(simplified)
    }

    /// Marks the points Douglas–Peucker retains. Requires at least 2 points.
    fn mark_kept(&self) -> Vec<bool> {
        let n = self.points.len();
        let mut keep = vec![false; n];
        keep[0] = true;
        keep[n - 1] = true;

        let mut stack = vec![(0, n - 1)];
        while let Some((first, last)) = stack.pop() {
            if last - first < 2 {
                continue;
            }
            if let Some(split) = self.farthest_beyond_tolerance(first, last) {
                keep[split] = true;
                stack.push((split, last));
                stack.push((first, split));
            }
        }

        keep
    }

    /// Returns the interior index farthest from the chord `first → last`, if
    /// its distance exceeds the tolerance. Ties go to the lowest index.
    fn farthest_beyond_tolerance(&self, first: usize, last: usize) -> Option<usize> {
        let a = &self.points[first];
        let b = &self.points[last];

        let mut max_dist = 0.0;
        let mut split = None;
        for (i, p) in self.points.iter().enumerate().take(last).skip(first + 1) {
            let d = point_to_line_dist(p, a, b, &self.epsilon);
            if d > max_dist {
                max_dist = d;
                split = Some(i);
            }
        }

        split.filter(|_| max_dist > self.tolerance)
    }
}

/// Simplifies `points` so no dropped point lies farther than `tolerance`
/// from the retained chord that replaced it.
///
/// # Errors
///
/// Returns `OperationError::InvalidArgument` if `tolerance` is not positive,
/// or `OperationError::InvalidInput` if a point is not finite.
pub fn simplify(points: &[Point2], tolerance: f64) -> Result<Vec<Point2>> {
    SimplifyPath::new(points, tolerance).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::StrokeGeomError;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn drops_near_collinear_keeps_spike() {
        let input = pts(&[(0.0, 0.0), (1.0, 0.01), (2.0, 0.0), (3.0, 10.0), (4.0, 0.0)]);
        let result = simplify(&input, 0.5).unwrap();
        assert_eq!(result, pts(&[(0.0, 0.0), (2.0, 0.0), (3.0, 10.0), (4.0, 0.0)]));
    }

    #[test]
    fn collinear_points_reduce_to_endpoints() {
        let input: Vec<Point2> = (0..50)
            .map(|i| Point2::new(f64::from(i), 2.0 * f64::from(i)))
            .collect();
        let result = simplify(&input, 1e-6).unwrap();
        assert_eq!(result, vec![input[0], input[49]]);
    }

    #[test]
    fn short_inputs_are_unchanged() {
        assert!(simplify(&[], 1.0).unwrap().is_empty());
        let one = pts(&[(3.0, 4.0)]);
        assert_eq!(simplify(&one, 1.0).unwrap(), one);
        let two = pts(&[(0.0, 0.0), (3.0, 4.0)]);
        assert_eq!(simplify(&two, 100.0).unwrap(), two);
    }

    #[test]
    fn non_positive_tolerance_is_rejected() {
        let input = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        for tol in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = simplify(&input, tol).unwrap_err();
            assert!(
                matches!(
                    err,
                    StrokeGeomError::Operation(OperationError::InvalidArgument {
                        name: "tolerance",
                        ..
                    })
                ),
                "tol={tol}: {err}"
            );
        }
        // Short input is still validated.
        assert!(simplify(&[], 0.0).is_err());
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let cases = [
            pts(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 0.0)]),
            pts(&[(f64::NAN, 0.0), (1.0, 5.0), (2.0, -5.0), (3.0, 0.0)]),
            pts(&[(0.0, 0.0), (1.0, 5.0), (2.0, -5.0), (f64::NAN, f64::NAN)]),
            pts(&[(0.0, 0.0), (f64::INFINITY, 1.0), (2.0, 0.0)]),
            // Short inputs are checked too.
            pts(&[(f64::NEG_INFINITY, 0.0)]),
        ];
        for input in &cases {
            let err = simplify(input, 0.5).unwrap_err();
            assert!(
                matches!(err, StrokeGeomError::Operation(OperationError::InvalidInput(_))),
                "{input:?}: {err}"
            );
        }
    }

    #[test]
    fn zero_length_chord_follows_epsilon_policy() {
        // Ends 1e-4 apart, interior point on the line through them.
        let input = pts(&[(0.0, 0.0), (5.0, 0.0), (1e-4, 0.0)]);

        // A real chord under the default epsilon: the point lies on its line.
        assert_eq!(simplify(&input, 1.0).unwrap().len(), 2);

        // A closed loop under a loose epsilon: the point is 5 units from the ends.
        let loose = Tolerance {
            absolute: 1e-3,
            relative: 0.0,
        };
        let result = SimplifyPath::new(&input, 1.0)
            .with_epsilon(loose)
            .execute()
            .unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn point_exactly_at_tolerance_is_dropped() {
        let input = pts(&[(0.0, 0.0), (1.0, 0.5), (2.0, 0.0)]);
        assert_eq!(simplify(&input, 0.5).unwrap().len(), 2);
        assert_eq!(simplify(&input, 0.499).unwrap().len(), 3);
    }

    #[test]
    fn consecutive_duplicates_do_not_break() {
        let input = pts(&[
            (0.0, 0.0),
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 0.0),
            (2.0, 3.0),
            (2.0, 3.0),
        ]);
        let result = simplify(&input, 0.1).unwrap();
        assert_eq!(result.first(), input.first());
        assert_eq!(result.last(), input.last());
        assert!(result.contains(&Point2::new(1.0, 0.0)));
        assert!(result.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn closed_stroke_uses_euclidean_distance() {
        // First and last coincide: the chord has no direction.
        let input = pts(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 0.0)]);
        let result = simplify(&input, 1.0).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn all_identical_points_collapse_to_two() {
        let input = vec![Point2::new(2.0, 2.0); 10];
        let result = simplify(&input, 0.5).unwrap();
        assert_eq!(result, vec![Point2::new(2.0, 2.0); 2]);
    }

    #[test]
    fn idempotent() {
        let input: Vec<Point2> = (0..400)
            .map(|i| {
                let x = f64::from(i) * 0.05;
                Point2::new(x, x.sin() * 3.0 + (x * 7.0).cos() * 0.2)
            })
            .collect();
        for tol in [0.01, 0.1, 0.5, 2.0] {
            let once = simplify(&input, tol).unwrap();
            let twice = simplify(&once, tol).unwrap();
            assert_eq!(once, twice, "tol={tol}");
        }
    }

    #[test]
    fn output_is_ordered_subsequence() {
        let input: Vec<Point2> = (0..200)
            .map(|i| {
                let a = f64::from(i) * 0.1;
                Point2::new(a.cos() * a, a.sin() * a)
            })
            .collect();
        let result = simplify(&input, 0.3).unwrap();
        let mut cursor = input.iter();
        for kept in &result {
            assert!(cursor.any(|p| p == kept), "{kept:?} out of order");
        }
    }

    #[test]
    fn dropped_points_are_within_tolerance_of_their_chord() {
        let input: Vec<Point2> = (0..300)
            .map(|i| {
                let x = f64::from(i) * 0.1;
                Point2::new(x, (x * 1.3).sin() * 4.0)
            })
            .collect();
        let tol = 0.25;
        let result = simplify(&input, tol).unwrap();

        let mut k = 0;
        for p in &input {
            if *p == result[k] {
                if k + 1 < result.len() {
                    k += 1;
                }
                continue;
            }
            let d = point_to_line_dist(p, &result[k - 1], &result[k], &Tolerance::default());
            assert!(d <= tol, "{p:?} is {d} from its chord");
        }
    }
}
