use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::figure::Figure;
use crate::kind::FigureKind;
use crate::point::{canonical_bits, Point};

/// Circle given by center and radius.
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// The radius is taken by absolute value.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    pub fn from_coords(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(Point::new(cx, cy), radius)
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Figure for Circle {
    /// Circumference `2πr`.
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Circle
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && canonical_bits(self.radius) == canonical_bits(other.radius)
    }
}

impl Eq for Circle {}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.center.hash(state);
        canonical_bits(self.radius).hash(state);
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "circle: (center = {}, radius = {})",
            self.center, self.radius
        )
    }
}
