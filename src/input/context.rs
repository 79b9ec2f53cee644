//! Input context for determining which commands are available.

/// What the screen currently shows, as far as input is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputContext {
    /// Store not hydrated yet; only global keys work
    #[default]
    Loading,
    /// Settings collapsed to the re-open affordance
    SettingsHidden,
    /// Settings panel editable
    SettingsOpen,
}

impl InputContext {
    pub fn accepts_text(self) -> bool {
        self == InputContext::SettingsOpen
    }
}
