//! The capability every figure exposes.

use std::fmt;

use crate::kind::FigureKind;

/// A planar figure with a perimeter and an area.
///
/// `kind` has a provided implementation returning [`FigureKind::NotDefined`],
/// so a figure type that never registers a kind still resolves to the
/// sentinel instead of failing.
pub trait Figure: fmt::Debug + fmt::Display {
    /// Boundary length (circumference for circles, length for segments).
    fn perimeter(&self) -> f64;

    fn area(&self) -> f64;

    fn kind(&self) -> FigureKind {
        FigureKind::NotDefined
    }
}

impl<F: Figure + ?Sized> Figure for Box<F> {
    fn perimeter(&self) -> f64 {
        (**self).perimeter()
    }

    fn area(&self) -> f64 {
        (**self).area()
    }

    fn kind(&self) -> FigureKind {
        (**self).kind()
    }
}

/// Shared `Display` body for polygon-like figures:
/// `name: (vertexes=[..], sides=[..])`.
pub(crate) fn fmt_outline<V: fmt::Display, S: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    vertices: &[V],
    sides: &[S],
) -> fmt::Result {
    write!(f, "{name}: (vertexes=[")?;
    for (i, v) in vertices.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{v}")?;
    }
    f.write_str("], sides=[")?;
    for (i, s) in sides.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{s}")?;
    }
    f.write_str("])")
}
