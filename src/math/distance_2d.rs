use super::{magnitude_of, Point2, Tolerance};

/// Returns the perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// When `a` and `b` coincide within `tol` (scaled by their magnitude) the line
/// is undefined and the plain Euclidean distance from `p` to `a` is returned
/// instead.
#[must_use]
pub fn point_to_line_dist(p: &Point2, a: &Point2, b: &Point2, tol: &Tolerance) -> f64 {
    let ab = b - a;
    let ap = p - a;

    if tol.is_zero_length(&ab, magnitude_of(&[a, b])) {
        return ap.norm();
    }

    // |ab × ap| / |ab|
    (ab.x * ap.y - ab.y * ap.x).abs() / ab.norm()
}

/// Returns the minimum distance from `p` to the segment from `a` to `b`.
///
/// A segment shorter than `tol` (scaled by its magnitude) is treated as the
/// point `a`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2, tol: &Tolerance) -> f64 {
    let ab = b - a;

    if tol.is_zero_length(&ab, magnitude_of(&[a, b])) {
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0);
    let closest = a + ab * t;

    (p - closest).norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    // ── point_to_line_dist tests ──

    #[test]
    fn line_dist_perpendicular() {
        let d = point_to_line_dist(
            &Point2::new(1.0, 3.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Tolerance::default(),
        );
        assert!((d - 3.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_beyond_segment_end_is_not_clamped() {
        // (10, 1) is far past b, but the line is infinite: distance is 1.
        let d = point_to_line_dist(
            &Point2::new(10.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Tolerance::default(),
        );
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_coincident_chord_falls_back_to_euclidean() {
        let d = point_to_line_dist(
            &Point2::new(3.0, 4.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Tolerance::default(),
        );
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_diagonal() {
        // Point (0, 2) to line y = x: distance √2.
        let d = point_to_line_dist(
            &Point2::new(0.0, 2.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(5.0, 5.0),
            &Tolerance::default(),
        );
        assert!((d - 2.0_f64.sqrt()).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_near_zero_chord_scales_with_magnitude() {
        // At canvas coordinates near 1e6 a chord of 1e-4 is below the scaled
        // epsilon (1e-3), so the distance is measured from `a`.
        let a = Point2::new(1.0e6, 1.0e6);
        let b = Point2::new(1.0e6 + 1e-4, 1.0e6);
        let p = Point2::new(1.0e6, 1.0e6 + 3.0);
        let d = point_to_line_dist(&p, &a, &b, &Tolerance::default());
        assert!((d - 3.0).abs() < 1e-9, "d={d}");

        // The same chord near the origin is long enough to define a line.
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1e-4, 0.0);
        let p = Point2::new(5.0, 3.0);
        let d = point_to_line_dist(&p, &a, &b, &Tolerance::default());
        assert!((d - 3.0).abs() < 1e-9, "d={d}");
        assert!((d - p.coords.norm()).abs() > 1.0);
    }

    // ── point_to_segment_dist tests ──

    #[test]
    fn segment_dist_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let d = point_to_segment_dist(
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Tolerance::default(),
        );
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        // Point (-1, 0) to segment (0,0)→(2,0). Closest at (0,0), dist = 1.
        let d = point_to_segment_dist(
            &Point2::new(-1.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Tolerance::default(),
        );
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_on_segment() {
        let d = point_to_segment_dist(
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Tolerance::default(),
        );
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        let d = point_to_segment_dist(
            &Point2::new(3.0, 4.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Tolerance::default(),
        );
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_respects_custom_tolerance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(0.01, 0.0);
        let p = Point2::new(0.005, 1.0);
        let loose = Tolerance {
            absolute: 0.1,
            relative: 0.0,
        };
        // Treated as the point `a` under the loose tolerance.
        let d = point_to_segment_dist(&p, &a, &b, &loose);
        assert!((d - (0.005_f64.powi(2) + 1.0).sqrt()).abs() < TOL, "d={d}");
        // A real segment under the default one.
        let d = point_to_segment_dist(&p, &a, &b, &Tolerance::default());
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }
}
