//! Router state that is not part of the screen flow.

/// State that persists across screen changes and is not owned by any screen.
#[derive(Debug, Clone, Default)]
pub struct GlobalState {
    /// Whether a text input is currently focused.
    /// When true, global keybindings (quit, help) are disabled so users can type freely.
    pub input_mode_active: bool,

    /// Whether the help overlay is visible.
    pub show_help_overlay: bool,

    /// Set once the user asked to quit.
    pub should_quit: bool,
}

impl GlobalState {
    /// Create a new global state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help_overlay = !self.show_help_overlay;
    }
}
