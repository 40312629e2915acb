// Reusable UI widgets

pub mod button;
pub mod logo;
pub mod menu;
pub mod text_input;

pub use button::Button;
pub use logo::{KitchenLogo, Size};
pub use menu::{Menu, MenuItem, MenuState, CARD_HEIGHT};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
