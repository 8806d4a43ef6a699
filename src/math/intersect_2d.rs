use super::{is_finite, magnitude_of, Point2, Tolerance};

/// Bounded segment-segment intersection in 2D.
///
/// Segment `a` is `a0 + t * (a1 - a0)` and segment `b` is `b0 + u * (b1 - b0)`.
/// Returns `(intersection_point, t, u)` with `t` and `u` clamped to `[0, 1]`.
///
/// Returns `None` when either segment has zero length, when the segments are
/// parallel or collinear (overlapping or not), or when the crossing of the
/// supporting lines falls outside either segment. Touching at an endpoint
/// counts as a crossing.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tol: &Tolerance,
) -> Option<(Point2, f64, f64)> {
    if ![a0, a1, b0, b1].iter().all(|p| is_finite(p)) {
        return None;
    }

    // Work in coordinates scaled into [-1, 1] so lengths and products of
    // lengths stay finite for any finite input.
    let magnitude = magnitude_of(&[a0, a1, b0, b1]);
    if magnitude <= 0.0 {
        return None;
    }
    let [a0, a1, b0, b1] = [a0, a1, b0, b1].map(|p| Point2::from(p.coords / magnitude));
    let eps = tol.scaled(magnitude) / magnitude;

    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.norm();
    let len_b = db.norm();
    if len_a <= eps || len_b <= eps {
        return None;
    }

    // denom = (x2-x1)*(y4-y3) - (y2-y1)*(x4-x3) = |da| |db| sin(angle)
    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() <= tol.relative * len_a * len_b {
        return None;
    }

    let d = b0 - a0;
    let t = (d.x * db.y - d.y * db.x) / cross;
    let u = (d.x * da.y - d.y * da.x) / cross;

    // Distance epsilon expressed in each segment's parameter space.
    let eps_t = eps / len_a;
    let eps_u = eps / len_b;
    if t < -eps_t || t > 1.0 + eps_t || u < -eps_u || u > 1.0 + eps_u {
        return None;
    }

    let t = t.clamp(0.0, 1.0);
    let u = u.clamp(0.0, 1.0);
    let point = Point2::from((a0 + da * t).coords * magnitude);
    Some((point, t, u))
}
