//! Rating bar UI model on top of `rym-bar-engine`.
//!
//! Everything here is computed, not rendered: the page script (or the CLI)
//! applies the resulting styles. Storage is reached only through
//! [`store::KeyValueStore`].
//!
//! # Quick start
//!
//! ```rust
//! use rym_bar_ui::prelude::*;
//!
//! let store = MemoryStore::new().with("theme", "night");
//! let options = BarOptions::load(&store);
//!
//! let mut layout = RatingBar::new(options, Rating::parse("3.45").unwrap())
//!     .theme_mode(ThemeMode::from_store(&store))
//!     .layout()
//!     .unwrap();
//! layout.settle();
//!
//! assert_eq!(layout.mask.get("width"), Some("31%"));
//! assert_eq!(layout.gradient.get("filter"), Some("saturate(50%)"));
//! ```

pub mod bar;
pub mod error;
pub mod event;
pub mod options;
pub mod rating;
pub mod settings;
pub mod store;
pub mod style;
pub mod theme_mode;

/// Common imports for hosts of the rating bar.
pub mod prelude {
    pub use crate::bar::{BarLayout, RatingBar, WRAPPER_ID};
    pub use crate::error::{OptionsError, RatingError, StoreError};
    pub use crate::event::{EventResult, Key, SettingsEvent};
    pub use crate::options::{BarOptions, OptionKey};
    pub use crate::rating::Rating;
    pub use crate::settings::{PanelState, SettingsPanel};
    pub use crate::store::{JsonFileStore, KeyValueStore, MemoryStore};
    pub use crate::style::Style;
    pub use crate::theme_mode::ThemeMode;

    // Re-export the engine types options are made of.
    pub use rym_bar_engine::paint::{
        CssColor, GradientError, RenderStyle, StopLayout, Theme, ThemeRegistry,
    };
}
