use std::fmt;

use super::color::ColorParseError;

/// Failure to build a gradient or to parse one of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradientError {
    /// Fewer than two colors: the step size would be undefined.
    InvalidPalette { len: usize },
    /// Render style literal other than `gradual` or `blend`.
    InvalidStyle(String),
    /// Stop layout literal other than `masked`, `reference` or `even`.
    InvalidLayout(String),
    /// Unknown theme name.
    UnknownTheme(String),
    /// Theme name that is blank or has surrounding whitespace.
    InvalidThemeName(String),
    InvalidColor(ColorParseError),
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::InvalidPalette { len } => {
                write!(f, "palette needs at least 2 colors, got {len}")
            }
            GradientError::InvalidStyle(s) => {
                write!(f, "unknown render style {s:?} (expected gradual or blend)")
            }
            GradientError::InvalidLayout(s) => {
                write!(f, "unknown stop layout {s:?} (expected masked, reference or even)")
            }
            GradientError::UnknownTheme(s) => write!(f, "unknown theme {s:?}"),
            GradientError::InvalidThemeName(s) => write!(f, "invalid theme name {s:?}"),
            GradientError::InvalidColor(e) => write!(f, "invalid palette color: {e}"),
        }
    }
}

impl std::error::Error for GradientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GradientError::InvalidColor(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorParseError> for GradientError {
    fn from(e: ColorParseError) -> Self {
        GradientError::InvalidColor(e)
    }
}
