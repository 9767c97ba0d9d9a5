use std::fmt;

/// Errors raised by fallible figure constructors.
///
/// Both kinds are produced before any figure state exists, so a failed
/// construction has no observable effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FigureError {
    /// Input cannot describe the figure at all (parallel diagonals, diagonals
    /// with different midpoints, wrong number of vertices).
    InvalidArgument { reason: String },
    /// Input has the right shape but the points are positioned wrong
    /// (no right-angle vertex among three rectangle corners).
    MismatchedConfiguration { reason: String },
}

impl FigureError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatched(reason: impl Into<String>) -> Self {
        Self::MismatchedConfiguration {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument { reason } | Self::MismatchedConfiguration { reason } => reason,
        }
    }
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::MismatchedConfiguration { reason } => {
                write!(f, "mismatched configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for FigureError {}
