use crate::styles::theme;
use ratatui::prelude::*;

/// Border style for a focused input
pub fn focused_border_style() -> Style {
    theme().border_focused_style()
}

/// Border style for an unfocused input
pub fn unfocused_border_style() -> Style {
    theme().border_style()
}

/// Text style for placeholder text
pub fn input_placeholder_style() -> Style {
    theme().muted_style()
}

/// Text style for entered text
pub fn input_text_style() -> Style {
    theme().text_style()
}
