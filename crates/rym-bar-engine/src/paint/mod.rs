//! Paint model for the rating bar.
//!
//! Scope:
//! - CSS color literals (validated, printed verbatim)
//! - named palettes and the theme registry
//! - gradient stop construction and `linear-gradient` values

pub mod color;
pub mod error;
pub mod gradient;
pub mod palette;
pub mod registry;

use std::fmt;

pub use color::{Color, ColorParseError, CssColor};
pub use error::GradientError;
pub use gradient::{
    build_gradient, ColorStop, GradientBuilder, GradientStops, LinearGradient, RenderStyle,
    StopLayout, MASK_END, MASK_START,
};
pub use palette::{Palette, Theme};
pub use registry::ThemeRegistry;

/// Paint source for a CSS `background` declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(CssColor),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: CssColor) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.rgba().is_opaque(),
            // The mask pair makes every bar gradient translucent at its end.
            Paint::LinearGradient(g) => g.stops.stops().iter().all(|s| s.color.rgba().is_opaque()),
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Solid(c) => write!(f, "{c}"),
            Paint::LinearGradient(g) => write!(f, "{g}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_paint_prints_literal() {
        let p = Paint::solid(CssColor::parse("rgb(255, 255, 255)").unwrap());
        assert_eq!(p.to_string(), "rgb(255, 255, 255)");
        assert!(p.is_opaque());
    }

    #[test]
    fn bar_gradient_is_translucent() {
        let stops = GradientBuilder::new(RenderStyle::Gradual)
            .build(Theme::Neon.palette().colors())
            .unwrap();
        assert!(!Paint::LinearGradient(LinearGradient::horizontal(stops)).is_opaque());
    }
}
