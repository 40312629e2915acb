pub mod layout;
pub mod style;
pub mod text_input;

pub use layout::{center_popup, center_rect};
pub use style::{
    focused_border_style, input_placeholder_style, input_text_style, unfocused_border_style,
};
pub use text_input::TextInput;
