use std::fmt;

use crate::store::KeyValueStore;

/// Key under which the site keeps its own color scheme.
pub const SITE_THEME_KEY: &str = "theme";

/// The site's color scheme, as stored by the site itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Eve,
    Night,
    Light,
}

impl ThemeMode {
    pub const fn name(self) -> &'static str {
        match self {
            ThemeMode::Eve => "eve",
            ThemeMode::Night => "night",
            ThemeMode::Light => "light",
        }
    }

    /// Unrecognized values map to `None`, same as an unset key.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "eve" => Some(ThemeMode::Eve),
            "night" => Some(ThemeMode::Night),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn from_store(store: &dyn KeyValueStore) -> Option<Self> {
        store.get(SITE_THEME_KEY).as_deref().and_then(Self::parse)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gradient saturation in percent: full in light mode, halved otherwise.
pub fn gradient_saturation(mode: Option<ThemeMode>) -> u32 {
    if mode == Some(ThemeMode::Light) { 100 } else { 50 }
}
