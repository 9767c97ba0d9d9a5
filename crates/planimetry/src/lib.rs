//! Planar figures: construction from partial input, validation, and metrics.
//!
//! Every figure implements [`Figure`] (perimeter, area, kind). Quadrangles
//! share the [`Quad`] helper for the generic side-sum perimeter and
//! diagonal-split area; rectangles and squares built from known side lengths
//! answer with closed-form formulas instead.
//!
//! API Policy
//! - Fallible constructors return `Result<_, FigureError>`; a figure that
//!   exists is always valid to query.
//! - Tolerances live in [`GeomCfg`]; `*_with_cfg` constructors take one
//!   explicitly, the rest use `GeomCfg::default()`.

pub mod cfg;
pub mod circle;
pub mod error;
pub mod figure;
pub mod kind;
pub mod parallelogram;
pub mod point;
pub mod quadrangle;
pub mod rectangle;
pub mod sample;
pub mod segment;
pub mod square;
pub mod triangle;

pub use cfg::GeomCfg;
pub use circle::Circle;
pub use error::FigureError;
pub use figure::Figure;
pub use kind::FigureKind;
pub use parallelogram::Parallelogram;
pub use point::Point;
pub use quadrangle::{Quad, Quadrangle};
pub use rectangle::Rectangle;
pub use segment::Segment;
pub use square::Square;
pub use triangle::Triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sample::{draw_figure, draw_figure_of, FigureCfg, ReplayToken, SampledFigure};
    pub use crate::{
        Circle, Figure, FigureError, FigureKind, GeomCfg, Parallelogram, Point, Quad, Quadrangle,
        Rectangle, Segment, Square, Triangle,
    };
}
