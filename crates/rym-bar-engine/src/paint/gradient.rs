use std::fmt;
use std::str::FromStr;

use super::color::CssColor;
use super::error::GradientError;

/// Position where the gradient is hard-cut to transparent.
///
/// Keeps the last color from bleeding past the rounded right edge of the bar.
pub const MASK_START: f64 = 98.0;
pub const MASK_END: f64 = 100.0;

// ── RenderStyle ───────────────────────────────────────────────────────────

/// How neighbouring palette colors meet.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum RenderStyle {
    /// Each color holds a flat band, then switches to the next.
    #[default]
    Gradual,
    /// Colors interpolate continuously into each other.
    Blend,
}

impl RenderStyle {
    pub const ALL: [RenderStyle; 2] = [RenderStyle::Gradual, RenderStyle::Blend];

    pub const fn name(self) -> &'static str {
        match self {
            RenderStyle::Gradual => "gradual",
            RenderStyle::Blend => "blend",
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderStyle {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "gradual" => Ok(RenderStyle::Gradual),
            "blend" => Ok(RenderStyle::Blend),
            other => Err(GradientError::InvalidStyle(other.to_string())),
        }
    }
}

// ── StopLayout ────────────────────────────────────────────────────────────

/// Position formula used to place palette colors.
///
/// - `Reference`: step `100 / (N - 1)`, every color emitted. The last color
///   lands *after* the transparent mask, exactly as the userscript did.
/// - `Masked`: same step, but emission stops at the mask so the last color is
///   swallowed. Positions never decrease.
/// - `Even`: step `100 / N`, every color gets a band before the mask.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum StopLayout {
    #[default]
    Masked,
    Reference,
    Even,
}

impl StopLayout {
    pub const ALL: [StopLayout; 3] = [StopLayout::Masked, StopLayout::Reference, StopLayout::Even];

    pub const fn name(self) -> &'static str {
        match self {
            StopLayout::Masked => "masked",
            StopLayout::Reference => "reference",
            StopLayout::Even => "even",
        }
    }
}

impl fmt::Display for StopLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StopLayout {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StopLayout::ALL
            .into_iter()
            .find(|l| l.name() == s.trim())
            .ok_or_else(|| GradientError::InvalidLayout(s.to_string()))
    }
}

// ── ColorStop ─────────────────────────────────────────────────────────────

/// A single gradient stop.
///
/// `position` is a percentage. It is printed with the shortest round-trip
/// representation (`50`, `33.333333333333336`) and never rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub color: CssColor,
    pub position: f64,
}

impl ColorStop {
    #[inline]
    pub fn new(color: CssColor, position: f64) -> Self {
        Self { color, position }
    }

    #[inline]
    pub fn is_transparent_mask(&self) -> bool {
        self.color.as_str() == "transparent"
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color, self.position)
    }
}

/// Ordered stop list, serialized as `"<color> <pos>%, <color> <pos>%, …"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradientStops(Vec<ColorStop>);

impl GradientStops {
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_monotonic(&self) -> bool {
        self.0.windows(2).all(|w| w[0].position <= w[1].position)
    }
}

impl fmt::Display for GradientStops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}

// ── LinearGradient ────────────────────────────────────────────────────────

/// `linear-gradient(<angle>deg, <stops>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub angle_deg: f64,
    pub stops: GradientStops,
}

impl LinearGradient {
    pub fn new(angle_deg: f64, stops: GradientStops) -> Self {
        Self { angle_deg, stops }
    }

    /// Horizontal, left to right.
    pub fn horizontal(stops: GradientStops) -> Self {
        Self::new(90.0, stops)
    }

    /// Returns true when the gradient is structurally usable by a browser.
    pub fn is_valid(&self) -> bool {
        self.angle_deg.is_finite()
            && self.stops.len() >= 2
            && self
                .stops
                .stops()
                .iter()
                .all(|s| s.position.is_finite() && (0.0..=MASK_END).contains(&s.position))
    }
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}deg, {})", self.angle_deg, self.stops)
    }
}

// ── GradientBuilder ───────────────────────────────────────────────────────

/// Builds gradient stop lists from a palette.
///
/// Stateless; the same input always yields the same output.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GradientBuilder {
    pub style: RenderStyle,
    pub layout: StopLayout,
}

impl GradientBuilder {
    pub const fn new(style: RenderStyle) -> Self {
        Self { style, layout: StopLayout::Masked }
    }

    pub const fn layout(mut self, layout: StopLayout) -> Self {
        self.layout = layout;
        self
    }

    /// # Errors
    /// [`GradientError::InvalidPalette`] when `colors` has fewer than two entries.
    pub fn build(&self, colors: &[CssColor]) -> Result<GradientStops, GradientError> {
        if colors.len() < 2 {
            return Err(GradientError::InvalidPalette { len: colors.len() });
        }

        let stops = match self.layout {
            StopLayout::Reference => self.segment_stops(colors, false),
            StopLayout::Masked => self.segment_stops(colors, true),
            StopLayout::Even => self.even_stops(colors),
        };

        log::trace!(
            "gradient: {} colors, style={}, layout={} -> {} stops",
            colors.len(),
            self.style,
            self.layout,
            stops.len()
        );
        Ok(GradientStops(stops))
    }

    /// Step `100 / (N - 1)`. The mask is emitted right after the
    /// second-to-last color; with `truncate` nothing follows it.
    fn segment_stops(&self, colors: &[CssColor], truncate: bool) -> Vec<ColorStop> {
        let segments = colors.len() - 1;
        let step = 100.0 / segments as f64;
        let place = |p: f64| if truncate { p.min(MASK_START) } else { p };

        let mut out = Vec::with_capacity(colors.len() * 2 + 2);
        let mut position = 0.0;
        for (i, color) in colors.iter().enumerate() {
            out.push(ColorStop::new(color.clone(), place(position)));

            if self.style == RenderStyle::Gradual && i + 1 < segments {
                out.push(ColorStop::new(color.clone(), place(position + step)));
            }

            if i + 1 == segments {
                push_mask(&mut out, color);
                if truncate {
                    break;
                }
            }

            position += step;
        }
        out
    }

    fn even_stops(&self, colors: &[CssColor]) -> Vec<ColorStop> {
        let n = colors.len();
        let step = 100.0 / n as f64;

        let mut out = Vec::with_capacity(n * 2 + 2);
        let mut position: f64 = 0.0;
        for (i, color) in colors.iter().enumerate() {
            out.push(ColorStop::new(color.clone(), position.min(MASK_START)));

            if self.style == RenderStyle::Gradual && i + 1 < n {
                out.push(ColorStop::new(color.clone(), (position + step).min(MASK_START)));
            }

            if i + 1 == n {
                push_mask(&mut out, color);
            }

            position += step;
        }
        out
    }
}

fn push_mask(out: &mut Vec<ColorStop>, last: &CssColor) {
    out.push(ColorStop::new(last.clone(), MASK_START));
    out.push(ColorStop::new(CssColor::transparent(), MASK_START));
    out.push(ColorStop::new(CssColor::transparent(), MASK_END));
}

/// Builds the stop-list string for `colors` with the default layout.
///
/// The direction angle is the caller's concern; wrap the result in
/// `linear-gradient(<angle>, …)` or use [`LinearGradient`].
///
/// # Errors
/// [`GradientError::InvalidPalette`] when `colors` has fewer than two entries.
pub fn build_gradient(colors: &[CssColor], style: RenderStyle) -> Result<String, GradientError> {
    Ok(GradientBuilder::new(style).build(colors)?.to_string())
}
