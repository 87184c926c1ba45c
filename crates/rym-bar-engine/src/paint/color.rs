use std::fmt;
use std::str::FromStr;

/// Straight-alpha sRGB color, 8 bits per channel.
///
/// This is the decoded form of a CSS literal. Output always goes through
/// [`CssColor`], which keeps the literal exactly as it was written.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    #[inline]
    pub const fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_rgb_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
            a: 255,
        }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

// ── ColorParseError ───────────────────────────────────────────────────────

/// Why a CSS color literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    /// Hex literal with a digit count other than 3, 4, 6 or 8.
    InvalidLength(usize),
    InvalidHex(String),
    /// Not `#…`, `rgb(…)`, `rgba(…)` or `transparent`.
    InvalidFunc(String),
    OutOfRange(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Empty => f.write_str("empty color literal"),
            ColorParseError::InvalidLength(n) => {
                write!(f, "hex color must have 3, 4, 6 or 8 digits, got {n}")
            }
            ColorParseError::InvalidHex(s) => write!(f, "invalid hex digits in {s:?}"),
            ColorParseError::InvalidFunc(s) => write!(f, "unrecognized color literal {s:?}"),
            ColorParseError::OutOfRange(s) => write!(f, "color component out of range in {s:?}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

// ── CssColor ──────────────────────────────────────────────────────────────

/// A validated CSS color literal.
///
/// The literal is kept verbatim (minus surrounding whitespace) because
/// gradient output must reproduce palette entries byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssColor {
    literal: String,
    rgba: Color,
}

impl CssColor {
    pub fn transparent() -> Self {
        Self { literal: "transparent".to_string(), rgba: Color::transparent() }
    }

    /// Opaque `#rrggbb` literal from a packed `0xRRGGBB` value.
    pub fn from_rgb_hex(hex: u32) -> Self {
        Self::from_color(Color::from_rgb_hex(hex))
    }

    pub fn from_color(rgba: Color) -> Self {
        Self { literal: rgba.to_hex(), rgba }
    }

    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let literal = s.trim();
        if literal.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let rgba = if literal.eq_ignore_ascii_case("transparent") {
            Color::transparent()
        } else if let Some(hex) = literal.strip_prefix('#') {
            parse_hex(hex)?
        } else {
            let lower = literal.to_ascii_lowercase();
            let call_args = |name: &str| lower.strip_prefix(name).and_then(|x| x.strip_suffix(')'));
            if let Some(args) = call_args("rgba(") {
                parse_rgb_args(args, true, literal)?
            } else if let Some(args) = call_args("rgb(") {
                parse_rgb_args(args, false, literal)?
            } else {
                return Err(ColorParseError::InvalidFunc(literal.to_string()));
            }
        };

        Ok(Self { literal: literal.to_string(), rgba })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    #[inline]
    pub fn rgba(&self) -> Color {
        self.rgba
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl FromStr for CssColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(format!("#{hex}")));
    }

    // All bytes are ASCII hex digits from here on.
    let digit = |i: usize| -> u8 {
        let c = hex.as_bytes()[i];
        match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            _ => c - b'A' + 10,
        }
    };
    let short = |i: usize| digit(i) * 17;
    let long = |i: usize| digit(i) << 4 | digit(i + 1);

    match hex.len() {
        3 => Ok(Color::from_srgb_u8(short(0), short(1), short(2), 255)),
        4 => Ok(Color::from_srgb_u8(short(0), short(1), short(2), short(3))),
        6 => Ok(Color::from_srgb_u8(long(0), long(2), long(4), 255)),
        8 => Ok(Color::from_srgb_u8(long(0), long(2), long(4), long(6))),
        n => Err(ColorParseError::InvalidLength(n)),
    }
}

/// Comma-separated `r, g, b` with an optional alpha in `[0, 1]`.
fn parse_rgb_args(args: &str, with_alpha: bool, literal: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::InvalidFunc(literal.to_string()));
    }

    let channel = |s: &str| -> Result<u8, ColorParseError> {
        s.parse::<u8>().map_err(|_| ColorParseError::OutOfRange(literal.to_string()))
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;

    let a = if with_alpha {
        let alpha = parts[3]
            .parse::<f32>()
            .ok()
            .filter(|v| (0.0..=1.0).contains(v))
            .ok_or_else(|| ColorParseError::OutOfRange(literal.to_string()))?;
        (alpha * 255.0).round() as u8
    } else {
        255
    };

    Ok(Color::from_srgb_u8(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(s: &str) -> CssColor { CssColor::parse(s).unwrap() }
    fn err(s: &str) -> ColorParseError { CssColor::parse(s).unwrap_err() }

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn hex_6digit() {
        let c = ok("#fa4146");
        assert_eq!(c.rgba(), Color::from_srgb_u8(0xfa, 0x41, 0x46, 255));
        assert_eq!(c.as_str(), "#fa4146");
    }

    #[test]
    fn hex_3digit_expands() {
        assert_eq!(ok("#f0a").rgba(), Color::from_srgb_u8(0xff, 0x00, 0xaa, 255));
    }

    #[test]
    fn hex_8digit_alpha() {
        assert_eq!(ok("#0000009c").rgba(), Color::from_srgb_u8(0, 0, 0, 0x9c));
    }

    #[test]
    fn hex_keeps_literal_case() {
        assert_eq!(ok("  #FFFFFF ").to_string(), "#FFFFFF");
    }

    #[test]
    fn hex_bad_length() {
        assert_eq!(err("#12345"), ColorParseError::InvalidLength(5));
    }

    #[test]
    fn hex_bad_digit() {
        assert!(matches!(err("#xyzxyz"), ColorParseError::InvalidHex(_)));
    }

    // ── rgb() / rgba() ────────────────────────────────────────────────────

    #[test]
    fn rgb_function() {
        let c = ok("rgb(18, 18, 18)");
        assert_eq!(c.rgba(), Color::from_srgb_u8(18, 18, 18, 255));
        assert_eq!(c.as_str(), "rgb(18, 18, 18)");
    }

    #[test]
    fn rgba_function() {
        assert_eq!(ok("rgba(0,0,0,0.5)").rgba(), Color::from_srgb_u8(0, 0, 0, 128));
    }

    #[test]
    fn rgb_component_out_of_range() {
        assert!(matches!(err("rgb(256, 0, 0)"), ColorParseError::OutOfRange(_)));
    }

    #[test]
    fn rgb_wrong_arity() {
        assert!(matches!(err("rgb(1, 2)"), ColorParseError::InvalidFunc(_)));
    }

    // ── misc ──────────────────────────────────────────────────────────────

    #[test]
    fn transparent_keyword() {
        assert_eq!(ok("transparent"), CssColor::transparent());
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(err("   "), ColorParseError::Empty);
    }

    #[test]
    fn named_colors_rejected() {
        assert!(matches!(err("red"), ColorParseError::InvalidFunc(_)));
    }

    #[test]
    fn from_rgb_hex_formats_lowercase() {
        assert_eq!(CssColor::from_rgb_hex(0x4182a5).as_str(), "#4182a5");
        assert_eq!(CssColor::from_rgb_hex(0x000000).as_str(), "#000000");
    }
}
