//! Screen identifiers.
//!
//! `ScreenId` is a closed enum: every screen the flow can show is listed here,
//! so routing code matches it exhaustively and there is no "unknown screen".

use std::fmt;

/// Application screens, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    /// Welcome screen with the "Next" button.
    #[default]
    Home,
    /// Pick one of the offered courses.
    CourseSelection,
    /// Pick a dish from the selected course.
    Menu,
    /// Dish details form.
    Details,
    /// "Dish Added Successfully!" screen.
    Confirmation,
}

impl ScreenId {
    /// All screens in flow order.
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Home,
        ScreenId::CourseSelection,
        ScreenId::Menu,
        ScreenId::Details,
        ScreenId::Confirmation,
    ];

    /// Title shown in the screen header.
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Home => "Christoffel's Kitchen",
            ScreenId::CourseSelection => "Select a Course",
            ScreenId::Menu => "Select a Dish",
            ScreenId::Details => "Dish Details",
            ScreenId::Confirmation => "Confirmation",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenId::Home => "Home",
            ScreenId::CourseSelection => "CourseSelection",
            ScreenId::Menu => "Menu",
            ScreenId::Details => "Details",
            ScreenId::Confirmation => "Confirmation",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_is_home() {
        assert_eq!(ScreenId::default(), ScreenId::Home);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ScreenId::CourseSelection.to_string(), "CourseSelection");
        assert_eq!(ScreenId::Details.to_string(), "Details");
    }
}
