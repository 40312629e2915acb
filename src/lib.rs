//! Christoffel's Kitchen - a terminal menu app.
//!
//! Walks the user from a welcome screen through course and dish selection
//! to a details form and a confirmation. The flow itself lives in
//! [`state`]; [`router`] connects it to the [`screens`].

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod menu;
pub mod router;
pub mod screens;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use menu::{dishes_for, Course};
pub use router::Router;
pub use state::{DishDetails, DishField, FlowAction, FlowState, ScreenId, Transition};

pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
