use std::fmt;
use std::str::FromStr;

use super::color::CssColor;
use super::error::GradientError;

/// Ordered list of at least two colors, left to right along the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<CssColor>,
}

impl Palette {
    pub fn new(colors: Vec<CssColor>) -> Result<Self, GradientError> {
        if colors.len() < 2 {
            return Err(GradientError::InvalidPalette { len: colors.len() });
        }
        Ok(Self { colors })
    }

    /// Parses a comma-separated list of hex literals (`#000,#fff`).
    ///
    /// `rgb()` literals contain commas themselves, so they are only accepted
    /// one per palette entry through [`Palette::new`].
    pub fn parse_list(s: &str) -> Result<Self, GradientError> {
        let colors = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(CssColor::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    #[inline]
    pub fn colors(&self) -> &[CssColor] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Never true for a constructed palette.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// ── Theme ─────────────────────────────────────────────────────────────────

const VIBRANT: &[u32] = &[0xfa4146, 0xfa961e, 0xfac850, 0x91be6e, 0x55a569, 0x4182a5];
const RAINBOW: &[u32] = &[0xff0000, 0xff961e, 0xffff00, 0x00cd00, 0xaaaaff, 0x6532ff, 0xc800ff];
const NEON: &[u32] = &[0xff00d9, 0xffb400, 0x96ff00, 0x00ffc8, 0x0082ff, 0xb432ff];
const COLOR_BLIND: &[u32] = &[0xdc321e, 0xffb400, 0xfaff00, 0x23fffa, 0x28b4ff, 0x2850ff];

/// Built-in named palettes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Vibrant,
    Rainbow,
    Neon,
    ColorBlind,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Vibrant, Theme::Rainbow, Theme::Neon, Theme::ColorBlind];

    /// Identifier used in storage and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Theme::Vibrant => "vibrant",
            Theme::Rainbow => "rainbow",
            Theme::Neon => "neon",
            Theme::ColorBlind => "colorBlind",
        }
    }

    /// Human-readable label for the settings panel.
    pub const fn label(self) -> &'static str {
        match self {
            Theme::Vibrant => "Vibrant",
            Theme::Rainbow => "Rainbow",
            Theme::Neon => "Neon",
            Theme::ColorBlind => "Color blind",
        }
    }

    pub fn palette(self) -> Palette {
        let codes = match self {
            Theme::Vibrant => VIBRANT,
            Theme::Rainbow => RAINBOW,
            Theme::Neon => NEON,
            Theme::ColorBlind => COLOR_BLIND,
        };
        // Every built-in table has more than two entries.
        Palette { colors: codes.iter().map(|&hex| CssColor::from_rgb_hex(hex)).collect() }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.name() == s.trim())
            .ok_or_else(|| GradientError::UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_color_rejected() {
        let err = Palette::new(vec![CssColor::from_rgb_hex(0xffffff)]).unwrap_err();
        assert_eq!(err, GradientError::InvalidPalette { len: 1 });
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(Palette::new(Vec::new()).unwrap_err(), GradientError::InvalidPalette { len: 0 });
    }

    #[test]
    fn parse_list_keeps_order() {
        let p = Palette::parse_list("#000000, #ffffff,#f00").unwrap();
        let lits: Vec<&str> = p.colors().iter().map(CssColor::as_str).collect();
        assert_eq!(lits, ["#000000", "#ffffff", "#f00"]);
    }

    #[test]
    fn parse_list_bad_color() {
        assert!(matches!(
            Palette::parse_list("#000000,nope"),
            Err(GradientError::InvalidColor(_))
        ));
    }

    #[test]
    fn builtin_palettes_match_site_themes() {
        assert_eq!(Theme::Vibrant.palette().colors()[0].as_str(), "#fa4146");
        assert_eq!(Theme::Rainbow.palette().len(), 7);
        assert_eq!(Theme::Neon.palette().colors()[5].as_str(), "#b432ff");
        assert_eq!(Theme::ColorBlind.palette().colors()[2].as_str(), "#faff00");
        for theme in Theme::ALL {
            assert!(theme.palette().len() >= 2, "{theme} too short");
        }
    }

    #[test]
    fn theme_names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme.name().parse::<Theme>().unwrap(), theme);
        }
        assert!(matches!("colorblind".parse::<Theme>(), Err(GradientError::UnknownTheme(_))));
    }
}
