//! Screen controllers for the application.
//!
//! Each controller implements [`Screen`]: it owns its own widget state
//! (selection, focus, text inputs), renders from a read-only snapshot of the
//! flow state, and turns input into a [`ScreenAction`].
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      Router                             │
//! │  match flow.screen() {                                  │
//! │    Home            => home.handle_event(...)            │
//! │    CourseSelection => course_selection.handle_event(...)│
//! │    ...                                                  │
//! │  }                                                      │
//! │  ScreenAction::Flow(action) => flow.apply(action)       │
//! └────────────────────────────────────────────────────────┘
//! ```

mod cards;
pub mod confirmation;
pub mod course_selection;
pub mod details;
pub mod home;
pub mod menu;
pub mod screen_trait;

pub use confirmation::ConfirmationScreen;
pub use course_selection::CourseSelectionScreen;
pub use details::DetailsScreen;
pub use home::HomeScreen;
pub use menu::MenuScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
