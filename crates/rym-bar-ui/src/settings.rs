//! Model of the bar's settings panel.
//!
//! The panel edits a draft copy of [`BarOptions`]. Nothing reaches the store
//! until the user saves; saving a changed draft asks the host page to reload
//! so the bar is rebuilt with the new options.

use rym_bar_engine::paint::{GradientError, LinearGradient, RenderStyle, StopLayout, ThemeRegistry};

use crate::event::{EventResult, Key, SettingsEvent};
use crate::options::{BarOptions, OptionKey};
use crate::store::KeyValueStore;
use crate::style::Style;

/// Page elements blurred while the panel is open.
pub const BLURRED_ELEMENT_IDS: [&str; 2] = ["page_header", "content_wrapper_outer"];
pub const PAGE_BLUR: &str = "blur(3px)";

// ── fields ────────────────────────────────────────────────────────────────

/// One entry of a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Toggle,
    Choice(Vec<Choice>),
    /// Whole pixels, inclusive range.
    Slider { min: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingField {
    pub key: OptionKey,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Fields shown by the panel, top to bottom. Theme choices list `themes`
/// in registration order.
pub fn fields(themes: &ThemeRegistry) -> Vec<SettingField> {
    let field = |key, label, kind| SettingField { key, label, kind };
    let theme_choices =
        themes.names().map(|name| Choice::new(ThemeRegistry::label(name), name)).collect();
    vec![
        field(OptionKey::Theme, "Colors", FieldKind::Choice(theme_choices)),
        field(
            OptionKey::Style,
            "Style",
            FieldKind::Choice(vec![
                Choice::new("Gradual", RenderStyle::Gradual.name()),
                Choice::new("Blend", RenderStyle::Blend.name()),
            ]),
        ),
        field(
            OptionKey::Layout,
            "Color stops",
            FieldKind::Choice(vec![
                Choice::new("Masked", StopLayout::Masked.name()),
                Choice::new("Classic", StopLayout::Reference.name()),
                Choice::new("Even", StopLayout::Even.name()),
            ]),
        ),
        field(OptionKey::Height, "Height", FieldKind::Slider { min: 4, max: 60 }),
        field(OptionKey::BorderRadius, "Border radius", FieldKind::Slider { min: 0, max: 20 }),
        field(OptionKey::Animation, "Animation", FieldKind::Toggle),
        field(OptionKey::Shadow, "Shadow", FieldKind::Toggle),
    ]
}

// ── SettingsPanel ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Open,
    /// Draft written to the store. `reload_required` when it differed from
    /// the options the bar was built with.
    Saved { reload_required: bool },
    Cancelled,
}

/// # Example
/// ```rust
/// use rym_bar_ui::prelude::*;
///
/// let mut store = MemoryStore::new();
/// let mut panel = SettingsPanel::open(BarOptions::load(&store));
/// panel.handle(SettingsEvent::Toggle(OptionKey::Shadow), &mut store);
/// panel.handle(SettingsEvent::KeyPress(Key::Enter), &mut store);
///
/// assert_eq!(panel.state(), PanelState::Saved { reload_required: true });
/// assert!(!BarOptions::load(&store).shadow);
/// ```
#[derive(Debug, Clone)]
pub struct SettingsPanel {
    themes: ThemeRegistry,
    fields: Vec<SettingField>,
    saved: BarOptions,
    draft: BarOptions,
    state: PanelState,
    last_error: Option<String>,
}

impl SettingsPanel {
    /// Opens the panel offering the built-in themes.
    pub fn open(current: BarOptions) -> Self {
        Self::open_with(current, ThemeRegistry::default())
    }

    pub fn open_with(current: BarOptions, themes: ThemeRegistry) -> Self {
        log::debug!("settings panel opened ({} themes)", themes.len());
        Self {
            fields: fields(&themes),
            themes,
            draft: current.clone(),
            saved: current,
            state: PanelState::Open,
            last_error: None,
        }
    }

    pub fn fields(&self) -> &[SettingField] {
        &self.fields
    }

    pub fn draft(&self) -> &BarOptions {
        &self.draft
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }

    /// Message of the most recently rejected input, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Gradient for the draft, for a live preview.
    ///
    /// # Errors
    /// Propagates [`GradientError`] from the builder.
    pub fn preview(&self) -> Result<LinearGradient, GradientError> {
        self.draft.gradient(&self.themes)
    }

    fn field(&self, key: OptionKey) -> Option<&SettingField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn handle(&mut self, event: SettingsEvent, store: &mut dyn KeyValueStore) -> EventResult {
        if !self.is_open() {
            return EventResult::Ignored;
        }

        match event {
            SettingsEvent::Toggle(key) => {
                if !matches!(self.field(key).map(|f| &f.kind), Some(FieldKind::Toggle)) {
                    return self.reject(format!("{key} is not a toggle"));
                }
                let current = self.draft.field(key) == "true";
                self.apply(key, if current { "false" } else { "true" })
            }
            SettingsEvent::Select { key, value } => {
                let known = match self.field(key).map(|f| &f.kind) {
                    Some(FieldKind::Choice(choices)) => {
                        Some(choices.iter().any(|c| c.value == value))
                    }
                    _ => None,
                };
                match known {
                    Some(true) => self.apply(key, &value),
                    Some(false) => self.reject(format!("{value:?} is not an option for {key}")),
                    None => self.reject(format!("{key} is not a choice")),
                }
            }
            SettingsEvent::Slide { key, value } => {
                let range = match self.field(key).map(|f| &f.kind) {
                    Some(&FieldKind::Slider { min, max }) => Some((min, max)),
                    _ => None,
                };
                let Some((min, max)) = range else {
                    return self.reject(format!("{key} is not a slider"));
                };
                if !value.is_finite() {
                    return self.reject(format!("slider value {value} for {key}"));
                }
                let px = value.round().clamp(f64::from(min), f64::from(max)) as u32;
                self.apply(key, &px.to_string())
            }
            SettingsEvent::ResetDefaults => {
                self.draft = BarOptions::default();
                EventResult::Consumed
            }
            SettingsEvent::Save | SettingsEvent::KeyPress(Key::Enter) => {
                self.save(store);
                EventResult::Consumed
            }
            SettingsEvent::Cancel | SettingsEvent::KeyPress(Key::Escape) => {
                log::debug!("settings panel cancelled");
                self.state = PanelState::Cancelled;
                EventResult::Consumed
            }
        }
    }

    fn apply(&mut self, key: OptionKey, value: &str) -> EventResult {
        match self.draft.set_field_in(key, value, &self.themes) {
            Ok(()) => {
                self.last_error = None;
                EventResult::Consumed
            }
            Err(e) => self.reject(e.to_string()),
        }
    }

    fn reject(&mut self, message: String) -> EventResult {
        log::warn!("settings panel: {message}");
        self.last_error = Some(message);
        EventResult::Ignored
    }

    fn save(&mut self, store: &mut dyn KeyValueStore) {
        self.draft.save(store);
        let reload_required = self.is_dirty();
        log::info!("settings saved (reload required: {reload_required})");
        self.state = PanelState::Saved { reload_required };
    }

    // ── styles ────────────────────────────────────────────────────────────

    /// Full-viewport dimmed overlay hosting the panel.
    pub fn overlay_style() -> Style {
        Style::new()
            .with("width", "100%")
            .with("height", "100%")
            .with("z-index", "1010")
            .with("top", "0")
            .with("left", "0")
            .with("position", "fixed")
            .with("display", "flex")
            .with("justify-content", "center")
            .with("font-family", "Roboto, Helvetica, Arial, sans-serif")
            .with("font-size", "16px")
            .with("background-color", "rgba(0, 0, 0, 0.5)")
    }

    pub fn container_style() -> Style {
        Style::new()
            .with("width", "50%")
            .with("margin", "auto")
            .with("padding", "20px")
            .with("z-index", "1020")
            .with("background-color", "#FFFFFF")
            .with("border-radius", "6px")
            .with("outline", "6px solid rgba(0,0,0,0.3)")
    }

    /// Applied to each of [`BLURRED_ELEMENT_IDS`] while the panel is open.
    pub fn blurred_page_style() -> Style {
        Style::new().with("filter", PAGE_BLUR)
    }
}

#[cfg(test)]
mod tests {
    use rym_bar_engine::paint::CssColor;

    use super::*;
    use crate::store::MemoryStore;

    fn panel() -> (SettingsPanel, MemoryStore) {
        (SettingsPanel::open(BarOptions::default()), MemoryStore::new())
    }

    // ── editing ───────────────────────────────────────────────────────────

    #[test]
    fn toggle_flips_draft_only() {
        let (mut p, mut store) = panel();
        assert!(p.handle(SettingsEvent::Toggle(OptionKey::Animation), &mut store).is_consumed());
        assert!(!p.draft().animation);
        assert!(p.is_dirty());
        assert!(store.is_empty());
    }

    #[test]
    fn select_known_choice() {
        let (mut p, mut store) = panel();
        let ev = SettingsEvent::Select { key: OptionKey::Theme, value: "neon".into() };
        assert!(p.handle(ev, &mut store).is_consumed());
        assert_eq!(p.draft().theme, "neon");
    }

    #[test]
    fn registered_theme_is_offered_and_selectable() {
        let mut themes = ThemeRegistry::default();
        let colors = vec![CssColor::from_rgb_hex(0x000000), CssColor::from_rgb_hex(0xffffff)];
        themes.register("mono", colors).unwrap();

        let mut p = SettingsPanel::open_with(BarOptions::default(), themes);
        let mut store = MemoryStore::new();
        let Some(FieldKind::Choice(choices)) = p.field(OptionKey::Theme).map(|f| &f.kind) else {
            panic!("theme is not a choice")
        };
        assert_eq!(choices.last(), Some(&Choice::new("mono", "mono")));

        let ev = SettingsEvent::Select { key: OptionKey::Theme, value: "mono".into() };
        assert!(p.handle(ev, &mut store).is_consumed());
        assert!(p.preview().unwrap().to_string().contains("#000000 0%"));
    }

    #[test]
    fn builtin_panel_does_not_offer_custom_theme() {
        let (mut p, mut store) = panel();
        let ev = SettingsEvent::Select { key: OptionKey::Theme, value: "mono".into() };
        assert_eq!(p.handle(ev, &mut store), EventResult::Ignored);
        assert_eq!(p.draft().theme, "vibrant");
    }

    #[test]
    fn select_unknown_choice_rejected() {
        let (mut p, mut store) = panel();
        let ev = SettingsEvent::Select { key: OptionKey::Style, value: "smooth".into() };
        assert_eq!(p.handle(ev, &mut store), EventResult::Ignored);
        assert!(p.last_error().is_some());
        assert!(!p.is_dirty());
    }

    #[test]
    fn wrong_field_kind_ignored() {
        let (mut p, mut store) = panel();
        let ev = SettingsEvent::Toggle(OptionKey::Height);
        assert_eq!(p.handle(ev, &mut store), EventResult::Ignored);
        let ev = SettingsEvent::Slide { key: OptionKey::Theme, value: 3.0 };
        assert_eq!(p.handle(ev, &mut store), EventResult::Ignored);
    }

    #[test]
    fn slider_rounds_and_clamps() {
        let (mut p, mut store) = panel();
        p.handle(SettingsEvent::Slide { key: OptionKey::Height, value: 33.6 }, &mut store);
        assert_eq!(p.draft().height, 34);
        p.handle(SettingsEvent::Slide { key: OptionKey::Height, value: 500.0 }, &mut store);
        assert_eq!(p.draft().height, 60);
        p.handle(SettingsEvent::Slide { key: OptionKey::BorderRadius, value: 0.0 }, &mut store);
        assert_eq!(p.draft().border_radius, None);
    }

    #[test]
    fn slider_rejects_nan() {
        let (mut p, mut store) = panel();
        let ev = SettingsEvent::Slide { key: OptionKey::Height, value: f64::NAN };
        assert_eq!(p.handle(ev, &mut store), EventResult::Ignored);
        assert_eq!(p.draft().height, BarOptions::DEFAULT_HEIGHT);
    }

    #[test]
    fn reset_defaults_restores_draft() {
        let options = BarOptions { shadow: false, ..BarOptions::default() };
        let mut p = SettingsPanel::open(options);
        let mut store = MemoryStore::new();
        p.handle(SettingsEvent::ResetDefaults, &mut store);
        assert_eq!(p.draft(), &BarOptions::default());
    }

    #[test]
    fn preview_follows_draft() {
        let (mut p, mut store) = panel();
        let ev = SettingsEvent::Select { key: OptionKey::Style, value: "blend".into() };
        p.handle(ev, &mut store);
        let css = p.preview().unwrap().to_string();
        assert!(css.starts_with("linear-gradient(90deg, #fa4146 0%, #fa961e 20%"));
    }

    // ── closing ───────────────────────────────────────────────────────────

    #[test]
    fn save_writes_store_and_requests_reload() {
        let (mut p, mut store) = panel();
        p.handle(SettingsEvent::Slide { key: OptionKey::Height, value: 24.0 }, &mut store);
        p.handle(SettingsEvent::Save, &mut store);
        assert_eq!(p.state(), PanelState::Saved { reload_required: true });
        assert_eq!(BarOptions::load(&store).height, 24);
    }

    #[test]
    fn unchanged_save_needs_no_reload() {
        let (mut p, mut store) = panel();
        p.handle(SettingsEvent::KeyPress(Key::Enter), &mut store);
        assert_eq!(p.state(), PanelState::Saved { reload_required: false });
    }

    #[test]
    fn escape_cancels_without_writing() {
        let (mut p, mut store) = panel();
        p.handle(SettingsEvent::Toggle(OptionKey::Shadow), &mut store);
        p.handle(SettingsEvent::KeyPress(Key::Escape), &mut store);
        assert_eq!(p.state(), PanelState::Cancelled);
        assert!(store.is_empty());
    }

    #[test]
    fn closed_panel_ignores_events() {
        let (mut p, mut store) = panel();
        p.handle(SettingsEvent::Cancel, &mut store);
        let ev = SettingsEvent::Toggle(OptionKey::Shadow);
        assert_eq!(p.handle(ev, &mut store), EventResult::Ignored);
        assert!(p.draft().shadow);
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn every_option_has_a_field() {
        let fields = fields(&ThemeRegistry::default());
        for key in OptionKey::ALL {
            assert!(fields.iter().any(|f| f.key == key), "{key} missing");
        }
    }

    #[test]
    fn overlay_sits_below_container() {
        assert_eq!(SettingsPanel::overlay_style().get("z-index"), Some("1010"));
        assert_eq!(SettingsPanel::container_style().get("z-index"), Some("1020"));
    }

    #[test]
    fn open_panel_blurs_page() {
        let page = SettingsPanel::blurred_page_style();
        assert_eq!(page.get("filter"), Some("blur(3px)"));
        assert!(BLURRED_ELEMENT_IDS.contains(&"page_header"));
    }
}
