//! Closed set of figure kinds and their display labels.
//!
//! Each concrete figure maps to its variant statically through
//! [`Figure::kind`](crate::Figure::kind). Name lookup is total: unknown
//! names resolve to [`FigureKind::NotDefined`].

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FigureKind {
    #[default]
    NotDefined,
    Dot,
    Line,
    Circle,
    Triangle,
    Square,
    Rectangle,
    Parallelogram,
}

impl FigureKind {
    /// Every defined kind, sentinel excluded.
    pub const ALL: [FigureKind; 7] = [
        FigureKind::Dot,
        FigureKind::Line,
        FigureKind::Circle,
        FigureKind::Triangle,
        FigureKind::Square,
        FigureKind::Rectangle,
        FigureKind::Parallelogram,
    ];

    /// Tag identifier, e.g. `"PARALLELOGRAM"`.
    pub fn name(self) -> &'static str {
        match self {
            FigureKind::NotDefined => "NOT_DEFINED",
            FigureKind::Dot => "DOT",
            FigureKind::Line => "LINE",
            FigureKind::Circle => "CIRCLE",
            FigureKind::Triangle => "TRIANGLE",
            FigureKind::Square => "SQUARE",
            FigureKind::Rectangle => "RECTANGLE",
            FigureKind::Parallelogram => "PARALLELOGRAM",
        }
    }

    /// Human-readable label, e.g. `"parallelogram"`.
    pub fn label(self) -> &'static str {
        match self {
            FigureKind::NotDefined => "not defined",
            FigureKind::Dot => "dot",
            FigureKind::Line => "line",
            FigureKind::Circle => "circle",
            FigureKind::Triangle => "triangle",
            FigureKind::Square => "square",
            FigureKind::Rectangle => "rectangle",
            FigureKind::Parallelogram => "parallelogram",
        }
    }

    /// Exact match against the defined tag identifiers. Anything else,
    /// including `"NOT_DEFINED"` itself and lower-case labels, is the sentinel.
    pub fn from_name(name: &str) -> FigureKind {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .unwrap_or(FigureKind::NotDefined)
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        self != FigureKind::NotDefined
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Figure type is {}.", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_for_defined_kinds() {
        for k in FigureKind::ALL {
            assert!(k.is_defined());
            assert_eq!(FigureKind::from_name(k.name()), k);
        }
    }

    #[test]
    fn unknown_names_resolve_to_sentinel() {
        assert_eq!(FigureKind::from_name("HEXAGON"), FigureKind::NotDefined);
        assert_eq!(FigureKind::from_name("square"), FigureKind::NotDefined);
        assert_eq!(FigureKind::from_name(""), FigureKind::NotDefined);
        assert_eq!(FigureKind::from_name("NOT_DEFINED"), FigureKind::NotDefined);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(FigureKind::Circle.to_string(), "Figure type is circle.");
        assert_eq!(
            FigureKind::NotDefined.to_string(),
            "Figure type is not defined."
        );
    }
}
