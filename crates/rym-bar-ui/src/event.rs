use crate::options::OptionKey;

/// Keys the settings panel reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
}

/// Input routed to the settings panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    /// A toggle was clicked.
    Toggle(OptionKey),
    /// A choice was picked in a radio group.
    Select { key: OptionKey, value: String },
    /// A slider was released at `value`.
    Slide { key: OptionKey, value: f64 },
    KeyPress(Key),
    Save,
    Cancel,
    /// Restore every draft field to its default.
    ResetDefaults,
}

/// Result returned by [`SettingsPanel::handle`](crate::settings::SettingsPanel::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Event did not apply (closed panel, wrong field kind, invalid value).
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
