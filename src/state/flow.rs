//! The screen flow controller.
//!
//! ```text
//! Home            --Next---------> CourseSelection
//! CourseSelection --SelectCourse-> Menu
//! CourseSelection --Back---------> Home
//! Menu            --SelectDish---> Details
//! Menu            --Back---------> CourseSelection
//! Details         --AddDish------> Confirmation
//! Details         --Cancel-------> Menu
//! Confirmation    --Done---------> CourseSelection
//! ```
//!
//! There is no back-stack: every "Back" edge has a fixed target.

use super::{DishDetails, DishField, FlowAction, ScreenId, Transition};
use crate::menu::dishes_for;
use tracing::{debug, info};

/// Look up the edge for `action` on `screen`.
///
/// Returns `None` when the screen has no such edge. `UpdateField` stays on
/// the details screen.
pub fn target(screen: ScreenId, action: &FlowAction) -> Option<ScreenId> {
    use FlowAction as A;
    use ScreenId as S;

    match (screen, action) {
        (S::Home, A::Next) => Some(S::CourseSelection),
        (S::CourseSelection, A::SelectCourse(_)) => Some(S::Menu),
        (S::CourseSelection, A::Back) => Some(S::Home),
        (S::Menu, A::SelectDish(_)) => Some(S::Details),
        (S::Menu, A::Back) => Some(S::CourseSelection),
        (S::Details, A::UpdateField(..)) => Some(S::Details),
        (S::Details, A::AddDish) => Some(S::Confirmation),
        (S::Details, A::Cancel) => Some(S::Menu),
        (S::Confirmation, A::Done) => Some(S::CourseSelection),
        (
            S::Home | S::CourseSelection | S::Menu | S::Details | S::Confirmation,
            A::Next
            | A::Back
            | A::SelectCourse(_)
            | A::SelectDish(_)
            | A::UpdateField(..)
            | A::AddDish
            | A::Cancel
            | A::Done,
        ) => None,
    }
}

/// State of the whole screen flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowState {
    screen: ScreenId,
    course: Option<String>,
    dishes: Vec<String>,
    details: DishDetails,
}

impl FlowState {
    /// Fresh state: home screen, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> ScreenId {
        self.screen
    }

    /// The last selected course, if any.
    pub fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }

    /// Dishes for the last selected course.
    pub fn dishes(&self) -> &[String] {
        &self.dishes
    }

    pub fn details(&self) -> &DishDetails {
        &self.details
    }

    /// Select a course and show its dishes.
    pub fn select_course(&mut self, course: impl Into<String>) {
        let course = course.into();
        self.dishes = dishes_for(&course);
        debug!("Selected course {:?} with dishes {:?}", course, self.dishes);
        self.course = Some(course);
        self.screen = ScreenId::Menu;
    }

    /// Pick a dish and open an empty details form for it.
    pub fn select_dish(&mut self, dish: impl Into<String>) {
        self.details = DishDetails::for_dish(dish, self.course.as_deref());
        self.screen = ScreenId::Details;
    }

    /// Replace one field of the details form.
    pub fn update_field(&mut self, field: DishField, value: impl Into<String>) {
        self.details = self.details.with_field(field, value);
    }

    /// Show the confirmation screen. The entered details are not stored anywhere.
    pub fn confirm_add(&mut self) {
        info!("Dish added: {:?}", self.details);
        self.screen = ScreenId::Confirmation;
    }

    /// Unconditional screen change.
    pub fn navigate(&mut self, target: ScreenId) {
        self.screen = target;
    }

    /// Apply a user action.
    ///
    /// Returns the transition taken, or `None` if the current screen has no
    /// edge for this action (the state is left untouched).
    pub fn apply(&mut self, action: FlowAction) -> Option<Transition> {
        let from = self.screen;
        let Some(to) = target(from, &action) else {
            debug!("Ignoring {:?} on {}", action, from);
            return None;
        };

        match action {
            FlowAction::SelectCourse(course) => self.select_course(course),
            FlowAction::SelectDish(dish) => self.select_dish(dish),
            FlowAction::UpdateField(field, value) => self.update_field(field, value),
            FlowAction::AddDish => self.confirm_add(),
            FlowAction::Next | FlowAction::Back | FlowAction::Cancel | FlowAction::Done => {
                self.navigate(to);
            }
        }

        debug_assert_eq!(self.screen, to);
        if from != to {
            info!("Screen transition: {} -> {}", from, to);
        }
        Some(Transition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_actions() -> Vec<FlowAction> {
        vec![
            FlowAction::Next,
            FlowAction::Back,
            FlowAction::SelectCourse("Starters".to_string()),
            FlowAction::SelectDish("kebabs".to_string()),
            FlowAction::UpdateField(DishField::Price, "10".to_string()),
            FlowAction::AddDish,
            FlowAction::Cancel,
            FlowAction::Done,
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = FlowState::new();
        assert_eq!(state.screen(), ScreenId::Home);
        assert_eq!(state.course(), None);
        assert!(state.dishes().is_empty());
        assert_eq!(state.details(), &DishDetails::default());
    }

    #[test]
    fn test_transition_table_is_exact() {
        use ScreenId as S;
        let expected: Vec<(S, &str, S)> = vec![
            (S::Home, "Next", S::CourseSelection),
            (S::CourseSelection, "SelectCourse", S::Menu),
            (S::CourseSelection, "Back", S::Home),
            (S::Menu, "SelectDish", S::Details),
            (S::Menu, "Back", S::CourseSelection),
            (S::Details, "UpdateField", S::Details),
            (S::Details, "AddDish", S::Confirmation),
            (S::Details, "Cancel", S::Menu),
            (S::Confirmation, "Done", S::CourseSelection),
        ];

        let mut found = Vec::new();
        for screen in ScreenId::ALL {
            for action in all_actions() {
                if let Some(to) = target(screen, &action) {
                    let name = format!("{:?}", action);
                    let name = name.split('(').next().unwrap_or_default().to_string();
                    found.push((screen, name, to));
                }
            }
        }

        assert_eq!(found.len(), expected.len());
        for (from, name, to) in expected {
            assert!(
                found.iter().any(|(f, n, t)| *f == from && n == name && *t == to),
                "missing edge {from} --{name}--> {to}"
            );
        }
    }

    #[test]
    fn test_select_course_always_goes_to_menu() {
        for course in ["Starters", "Main Course", "Desert", "Soup"] {
            let mut state = FlowState::new();
            state.navigate(ScreenId::CourseSelection);
            state.select_course(course);
            assert_eq!(state.screen(), ScreenId::Menu);
            assert_eq!(state.course(), Some(course));
            assert_eq!(state.dishes(), dishes_for(course).as_slice());
        }
    }

    #[test]
    fn test_select_dish_copies_course() {
        let mut state = FlowState::new();
        state.select_course("Starters");
        state.update_field(DishField::Price, "stale");
        state.select_dish("sandwiches");
        assert_eq!(state.screen(), ScreenId::Details);
        assert_eq!(
            state.details(),
            &DishDetails {
                name: "sandwiches".to_string(),
                description: String::new(),
                course: "Starters".to_string(),
                price: String::new(),
            }
        );
    }

    #[test]
    fn test_select_dish_without_course_uses_empty_string() {
        let mut state = FlowState::new();
        state.select_dish("Tarts");
        assert_eq!(state.details().course, "");
    }

    #[test]
    fn test_apply_rejects_missing_edges() {
        let mut state = FlowState::new();
        assert_eq!(state.apply(FlowAction::Done), None);
        assert_eq!(state.apply(FlowAction::SelectCourse("Starters".into())), None);
        assert_eq!(state, FlowState::new());
    }

    #[test]
    fn test_update_field_only_on_details() {
        let mut state = FlowState::new();
        state.navigate(ScreenId::Menu);
        assert_eq!(
            state.apply(FlowAction::UpdateField(DishField::Name, "x".into())),
            None
        );
        assert_eq!(state.details().name, "");
    }

    #[test]
    fn test_details_cancel_and_add_are_not_swapped() {
        let mut state = FlowState::new();
        state.select_course("Main Course");
        state.select_dish("Burgers");
        let cancel = state.apply(FlowAction::Cancel);
        assert_eq!(cancel.map(|t| t.to), Some(ScreenId::Menu));

        state.select_dish("Burgers");
        let add = state.apply(FlowAction::AddDish);
        assert_eq!(add.map(|t| t.to), Some(ScreenId::Confirmation));
    }

    #[test]
    fn test_update_field_transition_does_not_change_screen() {
        let mut state = FlowState::new();
        state.select_dish("Tarts");
        let t = state
            .apply(FlowAction::UpdateField(DishField::Description, "warm".into()))
            .unwrap();
        assert!(!t.changed());
        assert_eq!(state.details().description, "warm");
    }
}
