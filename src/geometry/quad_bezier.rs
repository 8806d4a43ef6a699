use std::fmt::Write as _;

use crate::math::Point2;

use super::Curve;

/// A quadratic Bézier curve: `start`, one `control` point, `end`.
///
/// This is the render descriptor produced for jump arcs. It maps one-to-one
/// onto an SVG/canvas `Q` command, so it can be spliced into a longer path
/// that already ends at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBezier {
    pub start: Point2,
    pub control: Point2,
    pub end: Point2,
}

impl QuadBezier {
    /// Creates a new quadratic curve.
    #[must_use]
    pub fn new(start: Point2, control: Point2, end: Point2) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Returns the same curve traversed from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.control, self.start)
    }

    /// Returns the `Q` path command continuing from the current point `start`.
    #[must_use]
    pub fn to_svg_command(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "Q {} {} {} {}",
            self.control.x, self.control.y, self.end.x, self.end.y
        );
        out
    }
}

impl Curve for QuadBezier {
    fn point_at(&self, t: f64) -> Point2 {
        if t <= 0.0 {
            return self.start;
        }
        if t >= 1.0 {
            return self.end;
        }
        // de Casteljau
        let a = self.start + (self.control - self.start) * t;
        let b = self.control + (self.end - self.control) * t;
        a + (b - a) * t
    }

    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }
}
