//! Rating bar engine.
//!
//! Owns the pieces with no page or storage dependency: color literals,
//! palettes, the gradient stop builder and logger setup.
//!
//! ```rust
//! use rym_bar_engine::paint::{build_gradient, CssColor, RenderStyle};
//!
//! let colors: Vec<CssColor> = ["#fa4146", "#fa961e", "#fac850"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let stops = build_gradient(&colors, RenderStyle::Gradual).unwrap();
//! assert!(stops.ends_with("transparent 98%, transparent 100%"));
//! ```

pub mod logging;
pub mod paint;
