use std::fmt::Write as _;

use crate::math::{magnitude_of, Point2, Tolerance};

use super::{Curve, LineSegment, QuadBezier};

/// One drawable piece of a rendered stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line(LineSegment),
    Quad(QuadBezier),
}

impl Curve for PathSegment {
    fn point_at(&self, t: f64) -> Point2 {
        match self {
            Self::Line(line) => line.point_at(t),
            Self::Quad(quad) => quad.point_at(t),
        }
    }

    fn start(&self) -> Point2 {
        match self {
            Self::Line(line) => line.start(),
            Self::Quad(quad) => quad.start(),
        }
    }

    fn end(&self) -> Point2 {
        match self {
            Self::Line(line) => line.end(),
            Self::Quad(quad) => quad.end(),
        }
    }
}

/// An ordered list of drawable segments making up one rendered stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokePath {
    segments: Vec<PathSegment>,
}

impl StrokePath {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Returns the segments in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of quadratic (jump) segments.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::Quad(_)))
            .count()
    }

    /// Returns the first point of the path.
    #[must_use]
    pub fn start(&self) -> Option<Point2> {
        self.segments.first().map(Curve::start)
    }

    /// Returns the last point of the path.
    #[must_use]
    pub fn end(&self) -> Option<Point2> {
        self.segments.last().map(Curve::end)
    }

    /// Returns `true` if every segment starts where the previous one ends.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|w| coincide(&w[0].end(), &w[1].start()))
    }

    /// Renders the path as SVG path data (`M`, `L` and `Q` commands).
    ///
    /// Each segment is emitted relative to the current point, so a
    /// non-contiguous path gets an extra `M` wherever a gap occurs.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        let mut cursor: Option<Point2> = None;

        for segment in &self.segments {
            let start = segment.start();
            let connected = cursor.is_some_and(|c| coincide(&c, &start));
            if !connected {
                if !out.is_empty() {
                    out.push(' ');
                }
                let _ = write!(out, "M {} {}", start.x, start.y);
            }
            out.push(' ');
            match segment {
                PathSegment::Line(line) => {
                    let _ = write!(out, "L {} {}", line.p2.x, line.p2.y);
                }
                PathSegment::Quad(quad) => out.push_str(&quad.to_svg_command()),
            }
            cursor = Some(segment.end());
        }

        out
    }
}

fn coincide(a: &Point2, b: &Point2) -> bool {
    Tolerance::default().is_zero_length(&(a - b), magnitude_of(&[a, b]))
}
