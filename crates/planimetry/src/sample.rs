//! Seeded random figures (replay tokens).
//!
//! Purpose
//! - Feed benchmarks, property tests and the demo driver with valid figures
//!   of every constructible kind, reproducibly.
//!
//! Model
//! - A `ReplayToken { seed, index }` is mixed into one `StdRng`; the same token
//!   always yields the same figure.
//! - Rotated rectangles and parallelograms are produced through the
//!   constructors that validate input (three corners, four loose points), so a
//!   sample also exercises those paths. A rejected draw is logged at debug and
//!   replaced by the direct construction of the same kind.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{
    Circle, Figure, FigureError, FigureKind, GeomCfg, Parallelogram, Point, Quadrangle, Rectangle,
    Segment, Square, Triangle,
};

/// Sampling ranges.
#[derive(Clone, Copy, Debug)]
pub struct FigureCfg {
    /// Anchors and centers lie in `[-coord_range, coord_range]²`.
    pub coord_range: f64,
    /// Lengths are drawn from `[min_len, max_len]`.
    pub min_len: f64,
    pub max_len: f64,
}

impl Default for FigureCfg {
    fn default() -> Self {
        Self {
            coord_range: 100.0,
            min_len: 0.1,
            max_len: 50.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One sampled figure of any constructible kind.
#[derive(Clone, Debug, PartialEq)]
pub enum SampledFigure {
    Dot(Point),
    Line(Segment),
    Circle(Circle),
    Triangle(Triangle),
    Square(Square),
    Rectangle(Rectangle),
    Parallelogram(Parallelogram),
}

impl SampledFigure {
    pub fn as_figure(&self) -> &dyn Figure {
        match self {
            SampledFigure::Dot(f) => f,
            SampledFigure::Line(f) => f,
            SampledFigure::Circle(f) => f,
            SampledFigure::Triangle(f) => f,
            SampledFigure::Square(f) => f,
            SampledFigure::Rectangle(f) => f,
            SampledFigure::Parallelogram(f) => f,
        }
    }

    pub fn into_boxed(self) -> Box<dyn Figure> {
        match self {
            SampledFigure::Dot(f) => Box::new(f),
            SampledFigure::Line(f) => Box::new(f),
            SampledFigure::Circle(f) => Box::new(f),
            SampledFigure::Triangle(f) => Box::new(f),
            SampledFigure::Square(f) => Box::new(f),
            SampledFigure::Rectangle(f) => Box::new(f),
            SampledFigure::Parallelogram(f) => Box::new(f),
        }
    }
}

/// Draw a figure whose kind is chosen uniformly from `FigureKind::ALL`.
pub fn draw_figure(cfg: FigureCfg, tok: ReplayToken) -> SampledFigure {
    let mut rng = tok.to_std_rng();
    let kind = FigureKind::ALL[rng.gen_range(0..FigureKind::ALL.len())];
    draw_kind(&mut rng, cfg, kind)
}

/// Draw a figure of the given kind. `NotDefined` falls back to a dot.
pub fn draw_figure_of(cfg: FigureCfg, tok: ReplayToken, kind: FigureKind) -> SampledFigure {
    let mut rng = tok.to_std_rng();
    draw_kind(&mut rng, cfg, kind)
}

fn draw_kind<R: Rng>(rng: &mut R, cfg: FigureCfg, kind: FigureKind) -> SampledFigure {
    match kind {
        FigureKind::Dot | FigureKind::NotDefined => SampledFigure::Dot(point(rng, cfg)),
        FigureKind::Line => SampledFigure::Line(Segment::new(point(rng, cfg), point(rng, cfg))),
        FigureKind::Circle => SampledFigure::Circle(Circle::new(point(rng, cfg), len(rng, cfg))),
        FigureKind::Triangle => SampledFigure::Triangle(Triangle::new(
            point(rng, cfg),
            point(rng, cfg),
            point(rng, cfg),
        )),
        FigureKind::Square => {
            if rng.gen_bool(0.5) {
                SampledFigure::Square(Square::from_center(point(rng, cfg), len(rng, cfg)))
            } else {
                SampledFigure::Square(Square::from_diagonal(point(rng, cfg), point(rng, cfg)))
            }
        }
        FigureKind::Rectangle => SampledFigure::Rectangle(rectangle(rng, cfg)),
        FigureKind::Parallelogram => SampledFigure::Parallelogram(parallelogram(rng, cfg)),
    }
}

fn point<R: Rng>(rng: &mut R, cfg: FigureCfg) -> Point {
    let r = cfg.coord_range.abs().max(f64::MIN_POSITIVE);
    Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r))
}

fn len<R: Rng>(rng: &mut R, cfg: FigureCfg) -> f64 {
    let lo = cfg.min_len.max(0.0);
    let hi = cfg.max_len.max(lo);
    rng.gen_range(lo..=hi)
}

/// Axis-aligned from side lengths, or rotated from three corners.
fn rectangle<R: Rng>(rng: &mut R, cfg: FigureCfg) -> Rectangle {
    let center = point(rng, cfg);
    let (w, h) = (len(rng, cfg), len(rng, cfg));
    if rng.gen_bool(0.5) {
        return Rectangle::from_center(center, w, h);
    }
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    rotated_rectangle(rng, center, w, h, theta).unwrap_or_else(|e| {
        tracing::debug!(
            %center, w, h, theta, error = %e,
            "rotated rectangle rejected, using axis-aligned"
        );
        Rectangle::from_center(center, w, h)
    })
}

/// Corners `m`, `m + w·u`, `m + h·v` for the unit frame `(u, v)` at angle
/// `theta`, handed to the three-corner constructor in shuffled order.
///
/// The right-angle tolerance covers the rounding of corner coordinates of
/// magnitude `|m| + w + h` relative to the shorter leg.
fn rotated_rectangle<R: Rng>(
    rng: &mut R,
    center: Point,
    w: f64,
    h: f64,
    theta: f64,
) -> Result<Rectangle, FigureError> {
    let u = Vector2::new(theta.cos(), theta.sin());
    let v = Vector2::new(-u.y, u.x);
    let m = center.to_vector();
    let mut corners = [Point::from(m + u * w), Point::from(m), Point::from(m + v * h)];
    corners.shuffle(rng);
    let scale = (m.amax() + w + h).max(1.0);
    let eps = (8.0 * f64::EPSILON * scale / w.min(h)).max(GeomCfg::default().eps_right_angle);
    let [a, b, c] = corners;
    let cfg = GeomCfg {
        eps_right_angle: eps,
        ..GeomCfg::default()
    };
    Rectangle::from_three_vertices_with_cfg(a, b, c, cfg)
}

/// Anchor-built parallelogram, re-read from its shuffled vertices.
fn parallelogram<R: Rng>(rng: &mut R, cfg: FigureCfg) -> Parallelogram {
    let shift_range = cfg.max_len.abs();
    let anchored = Parallelogram::from_anchor(
        point(rng, cfg),
        len(rng, cfg),
        len(rng, cfg),
        rng.gen_range(-shift_range..=shift_range),
    );
    reread_parallelogram(rng, &anchored).unwrap_or_else(|e| {
        tracing::debug!(
            %anchored, error = %e,
            "loose vertices rejected, using anchored parallelogram"
        );
        anchored
    })
}

fn reread_parallelogram<R: Rng>(
    rng: &mut R,
    anchored: &Parallelogram,
) -> Result<Parallelogram, FigureError> {
    let mut vertices = *anchored.vertices();
    vertices.shuffle(rng);
    Parallelogram::from_vertices(&vertices)
}
