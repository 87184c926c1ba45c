use rym_bar_engine::paint::{CssColor, GradientError, Paint, ThemeRegistry};

use crate::options::BarOptions;
use crate::rating::Rating;
use crate::style::Style;
use crate::theme_mode::{gradient_saturation, ThemeMode};

/// Element id of the bar wrapper; also what the settings panel listens on.
pub const WRAPPER_ID: &str = "userscript-bar-wrapper";

/// Mask width before the reveal transition starts.
pub const ANIMATION_START_WIDTH: &str = "90%";
pub const MASK_TRANSITION: &str = "width 500ms cubic-bezier(0.250, 0.460, 0.450, 0.940)";
const GRADIENT_SHADOW: &str = "#0000009c 0px 0px 4px 0px inset";
const MASK_SHADOW: &str = "#00000063 0px 0px 3px 0px inset";

/// Background used when the page's column color is unknown.
pub fn default_background() -> CssColor {
    CssColor::from_rgb_hex(0xffffff)
}

/// A horizontal rating bar: a full-width gradient partly covered, from the
/// right, by a mask painted in the page background color.
///
/// # Example
/// ```rust
/// use rym_bar_ui::prelude::*;
///
/// let rating = Rating::parse("3.45").unwrap();
/// let layout = RatingBar::new(BarOptions::default(), rating)
///     .theme_mode(Some(ThemeMode::Light))
///     .layout()
///     .unwrap();
/// assert_eq!(layout.title, "3.45/5 (69%)");
/// ```
#[derive(Debug, Clone)]
pub struct RatingBar {
    options: BarOptions,
    rating: Rating,
    theme_mode: Option<ThemeMode>,
    background: CssColor,
    themes: ThemeRegistry,
}

impl RatingBar {
    pub fn new(options: BarOptions, rating: Rating) -> Self {
        Self {
            options,
            rating,
            theme_mode: None,
            background: default_background(),
            themes: ThemeRegistry::default(),
        }
    }

    pub fn theme_mode(mut self, v: Option<ThemeMode>) -> Self { self.theme_mode = v; self }
    pub fn background(mut self, v: CssColor) -> Self { self.background = v; self }
    /// Palettes the options' theme name is looked up in.
    pub fn themes(mut self, v: ThemeRegistry) -> Self { self.themes = v; self }

    /// Computes the initial styles of the three bar elements.
    ///
    /// With animation enabled the mask starts at [`ANIMATION_START_WIDTH`];
    /// call [`BarLayout::settle`] once the wrapper is attached.
    ///
    /// # Errors
    /// Propagates [`GradientError`] from building the theme gradient.
    pub fn layout(&self) -> Result<BarLayout, GradientError> {
        let BarOptions { animation, border_radius, height, shadow, .. } = self.options;
        let remaining = self.rating.remaining_percentage();

        let wrapper = Style::new()
            .with("height", format!("{height}px"))
            .with("cursor", "pointer")
            .with("position", "relative")
            .with("margin-top", "6px");

        let fill = Paint::LinearGradient(self.options.gradient(&self.themes)?);
        let mut gradient =
            Style::new().with("height", "100%").with("background", fill.to_string());
        if let Some(r) = border_radius {
            gradient.set("border-radius", format!("{r}px"));
        }
        if self.theme_mode != Some(ThemeMode::Light) {
            gradient.set("filter", saturate(self.theme_mode));
        }
        if shadow {
            gradient.set("box-shadow", GRADIENT_SHADOW);
        }

        let background = Paint::solid(self.background.clone());
        if !background.is_opaque() {
            log::warn!("background {background} is translucent, the gradient shows through");
        }

        let initial_width =
            if animation { ANIMATION_START_WIDTH.to_string() } else { format!("{remaining}%") };
        let mut mask = Style::new()
            .with("width", initial_width)
            .with("height", "100%")
            .with("background-color", background.to_string())
            .with("margin-top", format!("-{height}px"))
            .with("right", "0")
            .with("position", "absolute")
            .with("filter", "contrast(90%)");
        if animation {
            mask.set("transition", MASK_TRANSITION);
        }
        if let Some(r) = border_radius {
            mask.set("border-top-right-radius", format!("{r}px"));
            mask.set("border-bottom-right-radius", format!("{r}px"));
        }
        if shadow {
            mask.set("box-shadow", MASK_SHADOW);
        }

        log::debug!("rating bar: {} ({remaining}% masked)", self.rating.title());

        Ok(BarLayout {
            title: self.rating.title(),
            wrapper,
            gradient,
            mask,
            remaining,
        })
    }
}

fn saturate(mode: Option<ThemeMode>) -> String {
    format!("saturate({}%)", gradient_saturation(mode))
}

/// Computed styles of a rating bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    /// Tooltip on the wrapper.
    pub title: String,
    pub wrapper: Style,
    pub gradient: Style,
    pub mask: Style,
    remaining: f64,
}

impl BarLayout {
    /// Final mask width, e.g. `31%` for a 3.45 rating.
    pub fn settled_mask_width(&self) -> String {
        format!("{}%", self.remaining)
    }

    pub fn is_settled(&self) -> bool {
        self.mask.get("width") == Some(self.settled_mask_width().as_str())
    }

    /// Moves the mask to its final width, which triggers the transition
    /// when animation is on.
    pub fn settle(&mut self) {
        let width = self.settled_mask_width();
        self.mask.set("width", width);
    }

    /// Follows a switch of the site's color scheme.
    pub fn apply_theme_change(&mut self, mode: Option<ThemeMode>, background: &CssColor) {
        self.mask.set("background-color", background.to_string());
        self.gradient.set("filter", saturate(mode));
        log::debug!("theme switched to {}", mode.map_or("default", ThemeMode::name));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rating(s: &str) -> Rating { Rating::parse(s).unwrap() }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn default_layout_styles() {
        let layout = RatingBar::new(BarOptions::default(), rating("3.45"))
            .background(CssColor::parse("rgb(248, 248, 248)").unwrap())
            .layout()
            .unwrap();

        assert_eq!(layout.title, "3.45/5 (69%)");
        assert_eq!(
            layout.wrapper.to_string(),
            "height: 20px; cursor: pointer; position: relative; margin-top: 6px;"
        );
        assert_eq!(
            layout.mask.to_string(),
            "width: 90%; height: 100%; background-color: rgb(248, 248, 248); margin-top: -20px; \
             right: 0; position: absolute; filter: contrast(90%); \
             transition: width 500ms cubic-bezier(0.250, 0.460, 0.450, 0.940); \
             border-top-right-radius: 6px; border-bottom-right-radius: 6px; \
             box-shadow: #00000063 0px 0px 3px 0px inset;"
        );

        let gradient: Vec<&str> = layout.gradient.iter().map(|(p, _)| p).collect();
        assert_eq!(gradient, ["height", "background", "border-radius", "filter", "box-shadow"]);
        assert_eq!(layout.gradient.get("filter"), Some("saturate(50%)"));
        let background = layout.gradient.get("background").unwrap();
        assert!(background.starts_with("linear-gradient(90deg, #fa4146 0%"));
    }

    #[test]
    fn settle_moves_mask_to_rating() {
        let mut layout = RatingBar::new(BarOptions::default(), rating("3.45")).layout().unwrap();
        assert!(!layout.is_settled());
        layout.settle();
        assert!(layout.is_settled());
        assert_eq!(layout.mask.get("width"), Some("31%"));
    }

    // ── options ───────────────────────────────────────────────────────────

    #[test]
    fn without_animation_mask_starts_settled() {
        let options = BarOptions { animation: false, ..BarOptions::default() };
        let layout = RatingBar::new(options, rating("2.5")).layout().unwrap();
        assert!(layout.is_settled());
        assert_eq!(layout.mask.get("transition"), None);
    }

    #[test]
    fn square_corners_and_no_shadow() {
        let options =
            BarOptions { border_radius: None, shadow: false, height: 12, ..BarOptions::default() };
        let layout = RatingBar::new(options, rating("4")).layout().unwrap();
        assert_eq!(layout.gradient.get("border-radius"), None);
        assert_eq!(layout.gradient.get("box-shadow"), None);
        assert_eq!(layout.mask.get("border-top-right-radius"), None);
        assert_eq!(layout.mask.get("box-shadow"), None);
        assert_eq!(layout.mask.get("margin-top"), Some("-12px"));
        assert_eq!(layout.wrapper.get("height"), Some("12px"));
    }

    #[test]
    fn custom_theme_from_registry() {
        let mut themes = ThemeRegistry::default();
        let colors = vec![CssColor::from_rgb_hex(0x112233), CssColor::from_rgb_hex(0x445566)];
        themes.register("harbor", colors).unwrap();

        let options = BarOptions { theme: "harbor".to_string(), ..BarOptions::default() };
        let layout = RatingBar::new(options.clone(), rating("4")).themes(themes).layout().unwrap();
        assert!(layout.gradient.get("background").unwrap().contains("#112233 0%"));

        let err = RatingBar::new(options, rating("4")).layout().unwrap_err();
        assert_eq!(err, GradientError::UnknownTheme("harbor".to_string()));
    }

    // ── theme mode ────────────────────────────────────────────────────────

    #[test]
    fn light_mode_keeps_full_saturation() {
        let layout = RatingBar::new(BarOptions::default(), rating("3"))
            .theme_mode(Some(ThemeMode::Light))
            .layout()
            .unwrap();
        assert_eq!(layout.gradient.get("filter"), None);
    }

    #[test]
    fn theme_change_updates_mask_and_filter() {
        let mut layout = RatingBar::new(BarOptions::default(), rating("3"))
            .theme_mode(Some(ThemeMode::Light))
            .layout()
            .unwrap();

        let night = CssColor::parse("rgb(30, 30, 30)").unwrap();
        layout.apply_theme_change(Some(ThemeMode::Night), &night);
        assert_eq!(layout.gradient.get("filter"), Some("saturate(50%)"));
        assert_eq!(layout.mask.get("background-color"), Some("rgb(30, 30, 30)"));

        layout.apply_theme_change(Some(ThemeMode::Light), &default_background());
        assert_eq!(layout.gradient.get("filter"), Some("saturate(100%)"));
        assert_eq!(layout.mask.get("background-color"), Some("#ffffff"));
    }
}
