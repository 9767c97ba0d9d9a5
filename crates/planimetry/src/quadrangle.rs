//! Shared state and generic metrics for four-vertex figures.
//!
//! `Quad` is a helper the concrete quadrangles embed, not a base type.
//! Its area splits along the `v0-v2` diagonal into two Heron triangles; that
//! is exact only for a convex simple quadrilateral listed in cyclic order,
//! and nothing here checks that. Shapes with closed-form metrics override.

use crate::figure::Figure;
use crate::point::Point;
use crate::segment::Segment;
use crate::triangle::Triangle;

/// Four vertices and the four cyclic sides between them.
///
/// Invariant: `sides[i]` runs from `vertices[i]` to `vertices[(i + 1) % 4]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quad {
    vertices: [Point; 4],
    sides: [Segment; 4],
}

impl Quad {
    pub fn new(vertices: [Point; 4]) -> Self {
        let sides = std::array::from_fn(|i| Segment::new(vertices[i], vertices[(i + 1) % 4]));
        Self { vertices, sides }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    #[inline]
    pub fn sides(&self) -> &[Segment; 4] {
        &self.sides
    }

    /// `(v0-v2, v1-v3)`.
    pub fn diagonals(&self) -> (Segment, Segment) {
        let v = &self.vertices;
        (Segment::new(v[0], v[2]), Segment::new(v[1], v[3]))
    }

    /// Sum of the four side lengths.
    pub fn perimeter(&self) -> f64 {
        self.sides.iter().map(Segment::length).sum()
    }

    /// `area(v0, v1, v2) + area(v2, v3, v0)`.
    pub fn area(&self) -> f64 {
        let [a, b, c, d] = self.vertices;
        Triangle::new(a, b, c).area() + Triangle::new(c, d, a).area()
    }
}

/// A figure backed by a [`Quad`].
pub trait Quadrangle: Figure {
    fn outline(&self) -> &Quad;

    fn vertices(&self) -> &[Point; 4] {
        self.outline().vertices()
    }

    fn sides(&self) -> &[Segment; 4] {
        self.outline().sides()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(pts: [(f64, f64); 4]) -> Quad {
        Quad::new(pts.map(Point::from))
    }

    #[test]
    fn sides_are_cyclic() {
        let q = quad([(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        for i in 0..4 {
            assert_eq!(q.sides()[i].start(), q.vertices()[i]);
            assert_eq!(q.sides()[i].end(), q.vertices()[(i + 1) % 4]);
        }
    }

    #[test]
    fn generic_metrics_of_axis_box() {
        let q = quad([(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        assert!((q.perimeter() - 6.0).abs() < 1e-12);
        assert!((q.area() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn convex_kite_area() {
        // Diagonals of length 4 and 2, perpendicular: area = 4 * 2 / 2.
        let q = quad([(-2.0, 0.0), (0.0, -1.0), (2.0, 0.0), (0.0, 1.0)]);
        assert!((q.area() - 4.0).abs() < 1e-12);
        let (d1, d2) = q.diagonals();
        assert!((d1.length() - 4.0).abs() < 1e-12);
        assert!((d2.length() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn concave_split_along_v0_v2_is_only_an_approximation() {
        // Dart with reflex vertex v3: shoelace area is 1, the v0-v2 split
        // gives 2 + 1 because it adds the notch instead of removing it.
        let q = quad([(0.0, 0.0), (2.0, -1.0), (4.0, 0.0), (2.0, -0.5)]);
        let shoelace = 1.0;
        assert!((q.area() - 3.0).abs() < 1e-12);
        assert!((q.area() - shoelace).abs() > 1.0);
    }
}
