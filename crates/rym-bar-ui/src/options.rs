use std::fmt;
use std::str::FromStr;

use rym_bar_engine::paint::{
    GradientBuilder, GradientError, LinearGradient, RenderStyle, StopLayout, Theme, ThemeRegistry,
};

use crate::error::OptionsError;
use crate::store::KeyValueStore;

/// Prefix of every key this crate writes to the store.
pub const KEY_PREFIX: &str = "rym-visual-rating.";

// ── OptionKey ─────────────────────────────────────────────────────────────

/// Name of one [`BarOptions`] field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Animation,
    BorderRadius,
    Theme,
    Height,
    Shadow,
    Style,
    Layout,
}

impl OptionKey {
    pub const ALL: [OptionKey; 7] = [
        OptionKey::Animation,
        OptionKey::BorderRadius,
        OptionKey::Theme,
        OptionKey::Height,
        OptionKey::Shadow,
        OptionKey::Style,
        OptionKey::Layout,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            OptionKey::Animation => "animation",
            OptionKey::BorderRadius => "borderRadius",
            OptionKey::Theme => "theme",
            OptionKey::Height => "height",
            OptionKey::Shadow => "shadow",
            OptionKey::Style => "style",
            OptionKey::Layout => "layout",
        }
    }

    /// Full key in the store, e.g. `rym-visual-rating.height`.
    pub fn storage_key(self) -> String {
        format!("{KEY_PREFIX}{}", self.name())
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionKey {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let name = s.strip_prefix(KEY_PREFIX).unwrap_or(s);
        OptionKey::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| OptionsError::UnknownKey(s.to_string()))
    }
}

// ── BarOptions ────────────────────────────────────────────────────────────

/// Appearance of the rating bar.
///
/// Defaults:
///
/// | field | default |
/// |-------|---------|
/// | `animation` | `true` |
/// | `border_radius` | `Some(6)` px |
/// | `theme` | `vibrant` |
/// | `height` | `20` px |
/// | `shadow` | `true` |
/// | `style` | `gradual` |
/// | `layout` | `masked` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarOptions {
    pub animation: bool,
    /// `None` draws square corners.
    pub border_radius: Option<u32>,
    /// Name of a palette in the [`ThemeRegistry`] the options were checked against.
    pub theme: String,
    /// Always greater than zero.
    pub height: u32,
    pub shadow: bool,
    pub style: RenderStyle,
    pub layout: StopLayout,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            animation: true,
            border_radius: Some(Self::DEFAULT_BORDER_RADIUS),
            theme: Theme::Vibrant.name().to_string(),
            height: Self::DEFAULT_HEIGHT,
            shadow: true,
            style: RenderStyle::Gradual,
            layout: StopLayout::Masked,
        }
    }
}

impl BarOptions {
    pub const DEFAULT_BORDER_RADIUS: u32 = 6;
    pub const DEFAULT_HEIGHT: u32 = 20;

    /// Reads options from `store` against the built-in themes.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::load_with(store, &ThemeRegistry::default())
    }

    /// Reads options from `store`, key by key.
    ///
    /// Missing keys keep their default. Invalid stored values, including
    /// theme names not in `themes`, are logged and fall back to the default
    /// as well.
    pub fn load_with(store: &dyn KeyValueStore, themes: &ThemeRegistry) -> Self {
        let mut options = Self::default();
        for key in OptionKey::ALL {
            let Some(raw) = store.get(&key.storage_key()) else { continue };
            if let Err(e) = options.set_field_in(key, &raw, themes) {
                log::warn!("ignoring stored option: {e}");
            }
        }
        log::debug!("loaded bar options: {options:?}");
        options
    }

    /// Writes every field to `store`.
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        for key in OptionKey::ALL {
            store.set(&key.storage_key(), &self.field(key));
        }
    }

    /// Removes every stored field so the next [`load`](Self::load) yields defaults.
    pub fn reset(store: &mut dyn KeyValueStore) {
        for key in OptionKey::ALL {
            store.remove(&key.storage_key());
        }
    }

    /// Current value of `key` in its storage form.
    pub fn field(&self, key: OptionKey) -> String {
        match key {
            OptionKey::Animation => self.animation.to_string(),
            OptionKey::BorderRadius => self.border_radius.unwrap_or(0).to_string(),
            OptionKey::Theme => self.theme.clone(),
            OptionKey::Height => self.height.to_string(),
            OptionKey::Shadow => self.shadow.to_string(),
            OptionKey::Style => self.style.name().to_string(),
            OptionKey::Layout => self.layout.name().to_string(),
        }
    }

    /// [`set_field_in`](Self::set_field_in) with the built-in themes.
    pub fn set_field(&mut self, key: OptionKey, value: &str) -> Result<(), OptionsError> {
        self.set_field_in(key, value, &ThemeRegistry::default())
    }

    /// Parses `value` into the field named by `key`.
    ///
    /// # Errors
    /// [`OptionsError::InvalidValue`] when `value` does not fit the field; the
    /// field is left untouched.
    pub fn set_field_in(
        &mut self,
        key: OptionKey,
        value: &str,
        themes: &ThemeRegistry,
    ) -> Result<(), OptionsError> {
        let v = value.trim();
        match key {
            OptionKey::Animation => self.animation = parse_bool(key, v)?,
            OptionKey::Shadow => self.shadow = parse_bool(key, v)?,
            OptionKey::BorderRadius => {
                self.border_radius = match v {
                    "false" | "none" => None,
                    _ => Some(parse_px(key, v)?).filter(|&r| r > 0),
                }
            }
            OptionKey::Height => {
                let h = parse_px(key, v)?;
                if h == 0 {
                    return Err(OptionsError::invalid(key, v, "height must be at least 1px"));
                }
                self.height = h;
            }
            OptionKey::Theme => {
                themes.resolve(v).map_err(|e| OptionsError::invalid(key, v, e.to_string()))?;
                self.theme = v.to_string();
            }
            OptionKey::Style => self.style = parse_named(key, v)?,
            OptionKey::Layout => self.layout = parse_named(key, v)?,
        }
        Ok(())
    }

    /// The bar's horizontal gradient for the configured theme and style.
    ///
    /// # Errors
    /// [`GradientError::UnknownTheme`] when `themes` has no palette named
    /// [`theme`](Self::theme).
    pub fn gradient(&self, themes: &ThemeRegistry) -> Result<LinearGradient, GradientError> {
        let palette = themes.resolve(&self.theme)?;
        let stops = GradientBuilder::new(self.style).layout(self.layout).build(palette.colors())?;
        Ok(LinearGradient::horizontal(stops))
    }
}

fn parse_bool(key: OptionKey, v: &str) -> Result<bool, OptionsError> {
    match v {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(OptionsError::invalid(key, v, "expected true or false")),
    }
}

/// Style and layout names share the engine's parse error.
fn parse_named<T>(key: OptionKey, v: &str) -> Result<T, OptionsError>
where
    T: FromStr<Err = GradientError>,
{
    v.parse().map_err(|e: GradientError| OptionsError::invalid(key, v, e.to_string()))
}

fn parse_px(key: OptionKey, v: &str) -> Result<u32, OptionsError> {
    v.strip_suffix("px")
        .unwrap_or(v)
        .parse::<u32>()
        .map_err(|_| OptionsError::invalid(key, v, "expected a whole number of pixels"))
}
