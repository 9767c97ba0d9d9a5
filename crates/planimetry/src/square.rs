//! Squares from a center and side length, or from two opposite corners.

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Matrix2;

use crate::figure::{fmt_outline, Figure};
use crate::kind::FigureKind;
use crate::point::{canonical_bits, Point};
use crate::quadrangle::{Quad, Quadrangle};

#[derive(Clone, Copy, Debug)]
pub struct Square {
    quad: Quad,
    known_side: Option<f64>,
}

impl Square {
    /// Axis-aligned square centered at `center`; `side` is taken by absolute value.
    pub fn from_center(center: Point, side: f64) -> Self {
        let s = side.abs();
        let v0 = center.translated(-s / 2.0, -s / 2.0);
        Self {
            quad: Quad::new([
                v0,
                v0.translated(s, 0.0),
                v0.translated(s, s),
                v0.translated(0.0, s),
            ]),
            known_side: Some(s),
        }
    }

    pub fn from_center_coords(cx: f64, cy: f64, side: f64) -> Self {
        Self::from_center(Point::new(cx, cy), side)
    }

    /// The unique square with diagonal `a-c`; vertices are `(a, b, c, d)`.
    ///
    /// `b` and `d` are `a` rotated by ±90° about the midpoint of `a-c`.
    /// Any two points work; coincident points collapse to a single point.
    pub fn from_diagonal(a: Point, c: Point) -> Self {
        let center = (a.to_vector() + c.to_vector()) / 2.0;
        let quarter_turn = Matrix2::new(0.0, -1.0, 1.0, 0.0);
        let arm = quarter_turn * (a.to_vector() - center);
        Self {
            quad: Quad::new([a, Point::from(center + arm), c, Point::from(center - arm)]),
            known_side: None,
        }
    }

    pub fn from_diagonal_coords(xa: f64, ya: f64, xc: f64, yc: f64) -> Self {
        Self::from_diagonal(Point::new(xa, ya), Point::new(xc, yc))
    }

    #[inline]
    pub fn known_side(&self) -> Option<f64> {
        self.known_side
    }
}

impl Quadrangle for Square {
    fn outline(&self) -> &Quad {
        &self.quad
    }
}

impl Figure for Square {
    fn perimeter(&self) -> f64 {
        match self.known_side {
            Some(s) => 4.0 * s,
            None => self.quad.perimeter(),
        }
    }

    fn area(&self) -> f64 {
        match self.known_side {
            Some(s) => s * s,
            None => self.quad.area(),
        }
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Square
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        self.quad == other.quad
            && self.known_side.map(canonical_bits) == other.known_side.map(canonical_bits)
    }
}

impl Eq for Square {}

impl Hash for Square {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quad.hash(state);
        self.known_side.map(canonical_bits).hash(state);
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_outline(f, "square", self.quad.vertices(), self.quad.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;

    #[test]
    fn unit_square_at_origin() {
        let center = Point::new(0.0, 0.0);
        let s = Square::from_center(center, 1.0);
        for v in s.vertices() {
            assert!((v.distance_to(&center) - 2f64.sqrt() / 2.0).abs() < 1e-12);
        }
        assert_eq!(s.perimeter(), 4.0);
        assert_eq!(s.area(), 1.0);
        assert_eq!(s.kind(), FigureKind::Square);
    }

    #[test]
    fn exact_matches_generic() {
        let s = Square::from_center_coords(-15.0, -2.44, 22.0);
        assert!((s.area() - s.outline().area()).abs() < 1e-9 * s.area());
        assert!((s.perimeter() - s.outline().perimeter()).abs() < 1e-9 * s.perimeter());
    }

    #[test]
    fn diagonal_matches_closed_form() {
        let (xa, ya, xc, yc) = (-15.0, 1.0, -14.0, 0.0);
        let s = Square::from_diagonal_coords(xa, ya, xc, yc);
        let (cx, cy) = ((xa + xc) / 2.0, (ya + yc) / 2.0);
        let b = Point::new(cx + cy - ya, cy - cx + xa);
        let d = Point::new(cx - cy + ya, cy + cx - xa);
        assert_eq!(s.vertices()[1], b);
        assert_eq!(s.vertices()[3], d);
        assert_eq!(s.known_side(), None);
    }

    #[test]
    fn diagonal_square_is_square() {
        let a = Point::new(-3.0, 1.0);
        let c = Point::new(-3.0, 3.0);
        let s = Square::from_diagonal(a, c);
        let side = s.sides()[0].length();
        for edge in s.sides() {
            assert!((edge.length() - side).abs() < 1e-12);
        }
        let d1 = Segment::new(s.vertices()[0], s.vertices()[2]);
        let d2 = Segment::new(s.vertices()[1], s.vertices()[3]);
        assert!((d1.length() - d2.length()).abs() < 1e-12);
        assert!((s.area() - a.distance_to(&c).powi(2) / 2.0).abs() < 1e-12);
        assert!((s.perimeter() - 4.0 * 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn coincident_diagonal_collapses() {
        let p = Point::new(2.0, 2.0);
        let s = Square::from_diagonal(p, p);
        assert!(s.vertices().iter().all(|v| *v == p));
        assert_eq!(s.area(), 0.0);
    }
}
