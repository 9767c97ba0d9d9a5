//! Tolerances for the geometric predicates used during construction.
//!
//! Policy
//! - Parallelism and right-angle checks are relative: they bound the sine or
//!   cosine of the enclosed angle, so they do not depend on segment length.
//! - Midpoint coincidence is absolute, scaled by `max(1, |coordinate|)`.
//! - `GeomCfg::exact()` zeroes everything and gives strict-equality semantics.

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Max |sin θ| between two directions still considered parallel.
    pub eps_parallel: f64,
    /// Max |cos θ| between two legs still considered perpendicular.
    pub eps_right_angle: f64,
    /// Max distance between two midpoints still considered the same point.
    pub eps_midpoint: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_parallel: 1e-12,
            eps_right_angle: 1e-12,
            eps_midpoint: 1e-9,
        }
    }
}

impl GeomCfg {
    /// Strict comparisons, no slack at all.
    pub fn exact() -> Self {
        Self {
            eps_parallel: 0.0,
            eps_right_angle: 0.0,
            eps_midpoint: 0.0,
        }
    }

    /// Same tolerance `eps` for every predicate.
    pub fn uniform(eps: f64) -> Self {
        let eps = eps.max(0.0);
        Self {
            eps_parallel: eps,
            eps_right_angle: eps,
            eps_midpoint: eps,
        }
    }
}
