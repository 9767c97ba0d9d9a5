//! Directed line segments.
//!
//! Parallelism compares directions through the 2D cross product instead of
//! slopes, so horizontal and vertical segments need no special casing.
//! A zero-length segment has no direction; it counts as parallel to every
//! segment, which makes it fail any "not parallel" validation.

use std::fmt;

use nalgebra::Vector2;

use crate::figure::Figure;
use crate::kind::FigureKind;
use crate::point::Point;
use crate::GeomCfg;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x() + self.end.x()) / 2.0,
            (self.start.y() + self.end.y()) / 2.0,
        )
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// `end - start`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end.to_vector() - self.start.to_vector()
    }

    /// Parallel test with the default tolerance.
    pub fn is_parallel_to(&self, other: &Segment) -> bool {
        self.is_parallel_to_eps(other, GeomCfg::default().eps_parallel)
    }

    /// True when `|sin θ| <= eps` for the angle θ between the two directions.
    pub fn is_parallel_to_eps(&self, other: &Segment, eps: f64) -> bool {
        let a = self.direction();
        let b = other.direction();
        let (na, nb) = (a.norm(), b.norm());
        if na == 0.0 || nb == 0.0 {
            return true;
        }
        let cross = a.x * b.y - a.y * b.x;
        cross.abs() <= eps * na * nb
    }
}

impl Figure for Segment {
    fn perimeter(&self) -> f64 {
        self.length()
    }

    fn area(&self) -> f64 {
        0.0
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Line
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: (from {}, to {})", self.start, self.end)
    }
}
