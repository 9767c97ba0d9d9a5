//! Rectangles from a center and two side lengths, or from three corners.
//!
//! Built from side lengths, a rectangle remembers them and answers
//! `perimeter`/`area` with `2(w + h)` and `w·h`. Built from corners, it falls
//! back to the generic [`Quad`] metrics.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cfg::GeomCfg;
use crate::error::FigureError;
use crate::figure::{fmt_outline, Figure};
use crate::kind::FigureKind;
use crate::point::{canonical_bits, Point};
use crate::quadrangle::{Quad, Quadrangle};

#[derive(Clone, Copy, Debug)]
pub struct Rectangle {
    quad: Quad,
    known_sides: Option<(f64, f64)>,
}

impl Rectangle {
    /// Axis-aligned rectangle `width × height` centered at `center`.
    ///
    /// Lengths are taken by absolute value; vertices run counterclockwise
    /// from the bottom-left corner.
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        let (w, h) = (width.abs(), height.abs());
        let v0 = center.translated(-w / 2.0, -h / 2.0);
        Self {
            quad: Quad::new([
                v0,
                v0.translated(w, 0.0),
                v0.translated(w, h),
                v0.translated(0.0, h),
            ]),
            known_sides: Some((w, h)),
        }
    }

    pub fn from_center_coords(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::from_center(Point::new(cx, cy), width, height)
    }

    /// Rectangle completed from three of its corners, in any order.
    ///
    /// The corner with the right angle is searched in the order `a`, `b`, `c`;
    /// with `m` that corner and `p`, `q` the other two, the vertices are
    /// `(p, m, q, p + q - m)`.
    pub fn from_three_vertices(a: Point, b: Point, c: Point) -> Result<Self, FigureError> {
        Self::from_three_vertices_with_cfg(a, b, c, GeomCfg::default())
    }

    pub fn from_three_vertices_with_cfg(
        a: Point,
        b: Point,
        c: Point,
        cfg: GeomCfg,
    ) -> Result<Self, FigureError> {
        let candidates = [(a, b, c), (b, a, c), (c, a, b)];
        for (m, p, q) in candidates {
            if is_right_angle(m, p, q, cfg.eps_right_angle) {
                let d = Point::from(p.to_vector() + q.to_vector() - m.to_vector());
                return Ok(Self {
                    quad: Quad::new([p, m, q, d]),
                    known_sides: None,
                });
            }
        }
        tracing::debug!(%a, %b, %c, "no right-angle corner among rectangle vertices");
        Err(FigureError::mismatched(
            "no right angle at any of the given vertices",
        ))
    }

    pub fn from_three_coords(
        xa: f64,
        ya: f64,
        xb: f64,
        yb: f64,
        xc: f64,
        yc: f64,
    ) -> Result<Self, FigureError> {
        Self::from_three_vertices(Point::new(xa, ya), Point::new(xb, yb), Point::new(xc, yc))
    }

    /// `(width, height)` when built from side lengths.
    #[inline]
    pub fn known_sides(&self) -> Option<(f64, f64)> {
        self.known_sides
    }
}

/// Angle `p-m-q` is right: `|cos| <= eps` with both legs non-degenerate.
pub(crate) fn is_right_angle(m: Point, p: Point, q: Point, eps: f64) -> bool {
    let u = p.to_vector() - m.to_vector();
    let v = q.to_vector() - m.to_vector();
    let (nu, nv) = (u.norm(), v.norm());
    if nu == 0.0 || nv == 0.0 {
        return false;
    }
    u.dot(&v).abs() <= eps * nu * nv
}

impl Quadrangle for Rectangle {
    fn outline(&self) -> &Quad {
        &self.quad
    }
}

impl Figure for Rectangle {
    fn perimeter(&self) -> f64 {
        match self.known_sides {
            Some((w, h)) => 2.0 * (w + h),
            None => self.quad.perimeter(),
        }
    }

    fn area(&self) -> f64 {
        match self.known_sides {
            Some((w, h)) => w * h,
            None => self.quad.area(),
        }
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Rectangle
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        let bits = |s: Option<(f64, f64)>| s.map(|(w, h)| (canonical_bits(w), canonical_bits(h)));
        self.quad == other.quad && bits(self.known_sides) == bits(other.known_sides)
    }
}

impl Eq for Rectangle {}

impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quad.hash(state);
        self.known_sides
            .map(|(w, h)| (canonical_bits(w), canonical_bits(h)))
            .hash(state);
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_outline(f, "rectangle", self.quad.vertices(), self.quad.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn vertex_set(r: &Rectangle) -> HashSet<Point> {
        r.vertices().iter().copied().collect()
    }

    #[test]
    fn from_center_layout_and_exact_metrics() {
        let r = Rectangle::from_center(Point::new(0.0, 0.0), 1.0, 2.0);
        assert_eq!(
            r.vertices(),
            &[
                Point::new(-0.5, -1.0),
                Point::new(0.5, -1.0),
                Point::new(0.5, 1.0),
                Point::new(-0.5, 1.0)
            ]
        );
        assert_eq!(r.perimeter(), 6.0);
        assert_eq!(r.area(), 2.0);
        assert_eq!(r.known_sides(), Some((1.0, 2.0)));
        assert_eq!(r.kind(), FigureKind::Rectangle);
    }

    #[test]
    fn from_center_leaves_caller_point_alone() {
        let center = Point::new(5.0, 6.0);
        let r = Rectangle::from_center(center, 11.3, 2.0);
        assert_eq!(center, Point::new(5.0, 6.0));
        assert_eq!(r.vertices()[0], Point::new(5.0 - 11.3 / 2.0, 5.0));
    }

    #[test]
    fn exact_matches_generic() {
        let r = Rectangle::from_center_coords(5.0, 6.0, 11.3, 2.0);
        assert!((r.area() - r.outline().area()).abs() < 1e-9 * r.area());
        assert!((r.perimeter() - r.outline().perimeter()).abs() < 1e-9 * r.perimeter());
    }

    #[test]
    fn negative_lengths_are_mirrored() {
        let r = Rectangle::from_center_coords(0.0, 0.0, -4.0, 2.0);
        assert_eq!(r, Rectangle::from_center_coords(0.0, 0.0, 4.0, 2.0));
        assert_eq!(r.area(), 8.0);
    }

    #[test]
    fn three_vertices_with_right_angle_at_first() {
        // Right angle at (3, 3): (2,4)-(3,3) = (-1,1), (1,1)-(3,3) = (-2,-2).
        let r = Rectangle::from_three_coords(3.0, 3.0, 2.0, 4.0, 1.0, 1.0).unwrap();
        assert_eq!(
            r.vertices(),
            &[
                Point::new(2.0, 4.0),
                Point::new(3.0, 3.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 2.0)
            ]
        );
        assert!((r.area() - 4.0).abs() < 1e-9);
        assert!((r.perimeter() - 6.0 * 2f64.sqrt()).abs() < 1e-9);
        assert_eq!(r.known_sides(), None);
    }

    #[test]
    fn three_vertices_any_order_same_set() {
        let a = Point::new(3.0, 3.0);
        let b = Point::new(2.0, 4.0);
        let c = Point::new(1.0, 1.0);
        let expected = vertex_set(&Rectangle::from_three_vertices(a, b, c).unwrap());
        for (p, q, r) in [(b, a, c), (b, c, a), (c, b, a), (c, a, b), (a, c, b)] {
            let rect = Rectangle::from_three_vertices(p, q, r).unwrap();
            assert_eq!(vertex_set(&rect), expected);
        }
    }

    #[test]
    fn collinear_points_mismatch() {
        let err = Rectangle::from_three_coords(0.0, 0.0, 1.0, 0.0, 2.0, 0.0).unwrap_err();
        assert!(matches!(err, FigureError::MismatchedConfiguration { .. }));
    }

    #[test]
    fn coincident_points_mismatch() {
        let p = Point::new(1.0, 1.0);
        let err = Rectangle::from_three_vertices(p, p, Point::new(2.0, 3.0)).unwrap_err();
        assert!(matches!(err, FigureError::MismatchedConfiguration { .. }));
    }

    #[test]
    fn right_angle_tolerance_boundary() {
        let m = Point::new(0.0, 0.0);
        let p = Point::new(1.0, 0.0);
        let q = Point::new(1e-13, 1.0);
        assert!(is_right_angle(m, p, q, 1e-12));
        assert!(!is_right_angle(m, p, q, 0.0));
        assert!(Rectangle::from_three_vertices(p, m, q).is_ok());
        assert!(Rectangle::from_three_vertices_with_cfg(p, m, q, GeomCfg::exact()).is_err());

        let skewed = Point::new(1e-6, 1.0);
        assert!(Rectangle::from_three_vertices(p, m, skewed).is_err());
    }
}
