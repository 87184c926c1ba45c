use super::color::CssColor;
use super::error::GradientError;
use super::palette::{Palette, Theme};

/// Palettes addressable by theme name.
///
/// [`ThemeRegistry::default`] holds the built-in [`Theme`]s; hosts add their
/// own with [`register`](Self::register). Names are kept in insertion order,
/// which is the order the settings panel lists them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    entries: Vec<(String, Palette)>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self {
            entries: Theme::ALL.iter().map(|t| (t.name().to_string(), t.palette())).collect(),
        }
    }
}

impl ThemeRegistry {
    /// Registry without the built-in themes.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Adds (or replaces) the palette called `name`.
    ///
    /// # Errors
    /// [`GradientError::InvalidThemeName`] for a blank name,
    /// [`GradientError::InvalidPalette`] for fewer than two colors. The
    /// registry is unchanged on error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        colors: Vec<CssColor>,
    ) -> Result<(), GradientError> {
        let name = name.into();
        if name.trim().is_empty() || name.trim() != name {
            return Err(GradientError::InvalidThemeName(name));
        }
        let palette = Palette::new(colors)?;
        log::debug!("registering theme {name:?} ({} colors)", palette.len());

        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, p)) => *p = palette,
            None => self.entries.push((name, palette)),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// # Errors
    /// [`GradientError::UnknownTheme`] when no palette is registered as `name`.
    pub fn resolve(&self, name: &str) -> Result<&Palette, GradientError> {
        self.get(name).ok_or_else(|| GradientError::UnknownTheme(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Palette)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Display label: the built-in label, or the name itself for custom themes.
    pub fn label(name: &str) -> String {
        name.parse::<Theme>().map_or_else(|_| name.to_string(), |t| t.label().to_string())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(hex: &[&str]) -> Vec<CssColor> {
        hex.iter().map(|s| CssColor::parse(s).unwrap()).collect()
    }

    #[test]
    fn seeded_with_builtins_in_order() {
        let reg = ThemeRegistry::default();
        let names: Vec<&str> = reg.names().collect();
        assert_eq!(names, ["vibrant", "rainbow", "neon", "colorBlind"]);
        assert_eq!(reg.resolve("neon").unwrap(), &Theme::Neon.palette());
    }

    #[test]
    fn register_custom_palette() {
        let mut reg = ThemeRegistry::default();
        reg.register("mono", colors(&["#000000", "#777777", "#ffffff"])).unwrap();
        assert_eq!(reg.len(), 5);
        assert_eq!(reg.names().last(), Some("mono"));
        assert_eq!(reg.resolve("mono").unwrap().colors()[1].as_str(), "#777777");
        assert_eq!(ThemeRegistry::label("mono"), "mono");
        assert_eq!(ThemeRegistry::label("colorBlind"), "Color blind");
    }

    #[test]
    fn register_replaces_existing_name_in_place() {
        let mut reg = ThemeRegistry::default();
        reg.register("vibrant", colors(&["#000", "#fff"])).unwrap();
        assert_eq!(reg.len(), 4);
        assert_eq!(reg.names().next(), Some("vibrant"));
        assert_eq!(reg.resolve("vibrant").unwrap().len(), 2);
    }

    #[test]
    fn single_color_palette_rejected() {
        let mut reg = ThemeRegistry::empty();
        let err = reg.register("solo", colors(&["#ff0000"])).unwrap_err();
        assert_eq!(err, GradientError::InvalidPalette { len: 1 });
        assert!(reg.is_empty());
    }

    #[test]
    fn blank_name_rejected() {
        let mut reg = ThemeRegistry::empty();
        assert!(matches!(
            reg.register("  ", colors(&["#000", "#fff"])),
            Err(GradientError::InvalidThemeName(_))
        ));
    }

    #[test]
    fn unknown_name_does_not_resolve() {
        let reg = ThemeRegistry::default();
        assert!(!reg.contains("sepia"));
        assert_eq!(
            reg.resolve("sepia").unwrap_err(),
            GradientError::UnknownTheme("sepia".to_string())
        );
    }
}
