//! Application state management.
//!
//! The whole flow is driven by one explicit state object, [`FlowState`],
//! that is passed into the views instead of being captured by them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      Router                          │
//! ├─────────────────────────────────────────────────────┤
//! │  ┌───────────────┐    ┌──────────────────────────┐  │
//! │  │ GlobalState   │    │ FlowState                │  │
//! │  │               │    │                          │  │
//! │  │ - help shown  │    │ - screen: ScreenId       │  │
//! │  │ - input mode  │    │ - course: Option<String> │  │
//! │  │               │    │ - dishes: Vec<String>    │  │
//! │  │               │    │ - details: DishDetails   │  │
//! │  └───────────────┘    └──────────────────────────┘  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Views never mutate `FlowState`. They return a [`FlowAction`] and the
//! router applies it.

pub mod details;
pub mod flow;
pub mod global;
pub mod screen;

pub use details::{DishDetails, DishField};
pub use flow::FlowState;
pub use global::GlobalState;
pub use screen::ScreenId;

/// A discrete user intent that may move the flow to another screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowAction {
    /// "Next" on the home screen.
    Next,
    /// "Back" on the course selection or menu screen.
    Back,
    /// A course button was pressed.
    SelectCourse(String),
    /// A dish was picked from the menu.
    SelectDish(String),
    /// Text was entered into one of the details inputs.
    UpdateField(DishField, String),
    /// "Add Dish" on the details screen.
    AddDish,
    /// "Cancel" on the details screen.
    Cancel,
    /// "Done" on the confirmation screen.
    Done,
}

/// A screen change produced by applying a [`FlowAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ScreenId,
    pub to: ScreenId,
}

impl Transition {
    /// Whether the visible screen changed.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}
