//! Parallelograms from an anchor, from two diagonals, or from four loose points.
//!
//! Every constructor lists vertices as `(d1.start, d2.start, d1.end, d2.end)`
//! for its diagonals `d1`, `d2`, i.e. opposite vertices sit two apart.
//!
//! Validation rule: two segments are diagonals of a parallelogram iff they
//! are not parallel and their midpoints coincide (`GeomCfg` tolerances).

use std::fmt;

use crate::cfg::GeomCfg;
use crate::error::FigureError;
use crate::figure::{fmt_outline, Figure};
use crate::kind::FigureKind;
use crate::point::Point;
use crate::quadrangle::{Quad, Quadrangle};
use crate::segment::Segment;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Parallelogram {
    quad: Quad,
}

impl Parallelogram {
    /// Horizontal base of length `horizontal_side` starting at `start`, the
    /// opposite side lifted by `altitude` and shifted right by `shift`.
    pub fn from_anchor(start: Point, horizontal_side: f64, altitude: f64, shift: f64) -> Self {
        let v1 = start.translated(horizontal_side, 0.0);
        let v2 = v1.translated(shift, altitude);
        let v3 = v2.translated(-horizontal_side, 0.0);
        Self {
            quad: Quad::new([start, v1, v2, v3]),
        }
    }

    pub fn from_diagonals(d1: Segment, d2: Segment) -> Result<Self, FigureError> {
        Self::from_diagonals_with_cfg(d1, d2, GeomCfg::default())
    }

    pub fn from_diagonals_with_cfg(
        d1: Segment,
        d2: Segment,
        cfg: GeomCfg,
    ) -> Result<Self, FigureError> {
        if let Err(e) = check_diagonals(&d1, &d2, cfg) {
            tracing::debug!(%d1, %d2, error = %e, "rejected parallelogram diagonals");
            return Err(e);
        }
        Ok(Self::from_valid_diagonals(d1, d2))
    }

    /// Four points in any order. The farthest-apart pair becomes the first
    /// diagonal, the remaining two the second. When several pairs tie for
    /// the maximum the first in `(i, j)` order wins; callers should not rely
    /// on which.
    pub fn from_vertices(points: &[Point]) -> Result<Self, FigureError> {
        Self::from_vertices_with_cfg(points, GeomCfg::default())
    }

    pub fn from_vertices_with_cfg(points: &[Point], cfg: GeomCfg) -> Result<Self, FigureError> {
        if points.len() != 4 {
            return Err(FigureError::invalid(format!(
                "parallelogram needs exactly 4 vertices, got {}",
                points.len()
            )));
        }
        let mut best = (0usize, 1usize);
        let mut best_dist = f64::NEG_INFINITY;
        for i in 0..4 {
            for j in (i + 1)..4 {
                let d = points[i].distance_to(&points[j]);
                if d > best_dist {
                    best_dist = d;
                    best = (i, j);
                }
            }
        }
        let rest: Vec<usize> = (0..4).filter(|&k| k != best.0 && k != best.1).collect();
        let d1 = Segment::new(points[best.0], points[best.1]);
        let d2 = Segment::new(points[rest[0]], points[rest[1]]);
        if check_diagonals(&d1, &d2, cfg).is_err() {
            tracing::debug!(?points, "points do not form a parallelogram");
            return Err(FigureError::invalid(
                "cannot construct a parallelogram from the given points",
            ));
        }
        Ok(Self::from_valid_diagonals(d1, d2))
    }

    fn from_valid_diagonals(d1: Segment, d2: Segment) -> Self {
        Self {
            quad: Quad::new([d1.start(), d2.start(), d1.end(), d2.end()]),
        }
    }
}

pub(crate) fn check_diagonals(d1: &Segment, d2: &Segment, cfg: GeomCfg) -> Result<(), FigureError> {
    if d1.is_parallel_to_eps(d2, cfg.eps_parallel) {
        return Err(FigureError::invalid("diagonals are parallel"));
    }
    if !same_point(d1.midpoint(), d2.midpoint(), cfg.eps_midpoint) {
        return Err(FigureError::invalid("diagonals do not bisect each other"));
    }
    Ok(())
}

/// `|a - b| <= eps * max(1, |a.x|, |a.y|, |b.x|, |b.y|)`, symmetric in `a`, `b`.
fn same_point(a: Point, b: Point, eps: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = [a.x(), a.y(), b.x(), b.y()]
        .into_iter()
        .fold(1f64, |acc, c| acc.max(c.abs()));
    (a.to_vector() - b.to_vector()).norm() <= eps * scale
}

impl Quadrangle for Parallelogram {
    fn outline(&self) -> &Quad {
        &self.quad
    }
}

impl Figure for Parallelogram {
    fn perimeter(&self) -> f64 {
        self.quad.perimeter()
    }

    fn area(&self) -> f64 {
        self.quad.area()
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Parallelogram
    }
}

impl fmt::Display for Parallelogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_outline(f, "parallelogram", self.quad.vertices(), self.quad.sides())
    }
}
