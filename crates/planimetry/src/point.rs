//! Points in the plane.
//!
//! `Point` is plain `Copy` data. Constructors that derive vertices from a
//! point (centering a rectangle, say) always work on their own copy, so a
//! caller's point is never changed behind its back. The only mutation is the
//! explicit [`Point::move_by`].

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use crate::figure::Figure;
use crate::kind::FigureKind;

/// A 2D coordinate.
///
/// Equality and hashing are by value: `-0.0 == 0.0`, and NaN coordinates
/// compare equal to each other so that `Eq` and `Hash` agree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Translate in place by `(dx, dy)`.
    #[inline]
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// A fresh point translated by `(dx, dy)`.
    #[inline]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance. Exactly `0.0` for points that compare equal.
    pub fn distance_to(&self, other: &Point) -> f64 {
        if self == other {
            return 0.0;
        }
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Bit pattern used for value equality: folds `-0.0` onto `0.0` and every NaN
/// onto one canonical NaN.
#[inline]
pub(crate) fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.x) == canonical_bits(other.x)
            && canonical_bits(self.y) == canonical_bits(other.y)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl Figure for Point {
    fn perimeter(&self) -> f64 {
        0.0
    }

    fn area(&self) -> f64 {
        0.0
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Dot
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dot: ({}, {})", self.x, self.y)
    }
}
