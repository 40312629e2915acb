//! Theme and style system
//!
//! Provides consistent styling across the screens with support for
//! light and dark terminals, plus a no-color mode.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Selection indicator shown next to the selected card
pub const LIST_HIGHLIGHT_SYMBOL: &str = "▌";

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (`NO_COLOR=1` / `--theme nocolor`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    // === Accents ===
    /// Titles, focused borders
    pub primary: Color,
    /// Course buttons
    pub course: Color,
    /// Dish names on the menu
    pub dish: Color,

    // === Buttons ===
    /// Forward buttons ("Next", "Add Dish")
    pub button_forward: Color,
    /// Backward buttons ("Back", "Cancel")
    pub button_back: Color,
    /// "Done"
    pub button_done: Color,
    /// Label text on a button
    pub button_text: Color,

    // === Text ===
    pub text: Color,
    pub text_muted: Color,
    pub success: Color,

    // === UI ===
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            course: Color::Rgb(255, 99, 71),
            dish: Color::LightBlue,
            button_forward: Color::Rgb(0, 122, 255),
            button_back: Color::Rgb(255, 69, 0),
            button_done: Color::Rgb(50, 205, 50),
            button_text: Color::White,
            text: Color::White,
            text_muted: Color::DarkGray,
            success: Color::Green,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            course: Color::Rgb(205, 55, 30),
            dish: Color::Blue,
            button_forward: Color::Rgb(0, 122, 255),
            button_back: Color::Rgb(255, 69, 0),
            button_done: Color::Rgb(34, 139, 34),
            button_text: Color::White,
            text: Color::Black,
            text_muted: Color::DarkGray,
            success: Color::Green,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
            background: Color::Reset,
        }
    }

    /// No-color theme
    ///
    /// Style helpers below avoid setting fg/bg in this mode so the terminal
    /// defaults are used without emitting color codes.
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            course: Color::Reset,
            dish: Color::Reset,
            button_forward: Color::Reset,
            button_back: Color::Reset,
            button_done: Color::Reset,
            button_text: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            success: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            background: Color::Reset,
        }
    }

    fn is_no_color(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    pub fn title_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn success_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    pub fn border_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Style for a button with the given fill color
    pub fn button_style(&self, fill: Color, focused: bool) -> Style {
        if self.is_no_color() {
            return if focused {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
        }
        let style = Style::default()
            .fg(self.button_text)
            .bg(fill)
            .add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// Style for the selected card in a list
    pub fn highlight_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn background_style(&self) -> Style {
        if self.is_no_color() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("LIGHT".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("whatever".parse::<ThemeType>().unwrap(), ThemeType::Dark);
    }

    #[test]
    fn test_no_color_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        for style in [
            t.highlight_style(),
            t.button_style(t.button_forward, true),
            t.title_style(),
        ] {
            assert!(style.fg.is_none());
            assert!(style.bg.is_none());
        }
    }

    #[test]
    fn test_button_style_uses_fill() {
        let t = Theme::dark();
        let style = t.button_style(t.button_done, false);
        assert_eq!(style.bg, Some(Color::Rgb(50, 205, 50)));
        assert_eq!(style.fg, Some(Color::White));
    }
}
