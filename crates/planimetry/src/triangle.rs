use std::fmt;

use crate::figure::{fmt_outline, Figure};
use crate::kind::FigureKind;
use crate::point::Point;
use crate::segment::Segment;

/// Triangle with sides `v0-v1`, `v1-v2`, `v2-v0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    vertices: [Point; 3],
    sides: [Segment; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
            sides: [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)],
        }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3))
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    #[inline]
    pub fn sides(&self) -> &[Segment; 3] {
        &self.sides
    }
}

impl Figure for Triangle {
    fn perimeter(&self) -> f64 {
        self.sides.iter().map(Segment::length).sum()
    }

    /// Heron's formula. The radicand is clamped at zero, so collinear or
    /// coincident vertices give `0.0` rather than NaN from rounding.
    fn area(&self) -> f64 {
        let [a, b, c] = self.sides.map(|s| s.length());
        let s = (a + b + c) / 2.0;
        (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Triangle
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_outline(f, "triangle", &self.vertices, &self.sides)
    }
}
