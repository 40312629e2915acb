use christoffels_kitchen::state::flow::target;
use christoffels_kitchen::state::{DishDetails, DishField, FlowAction, FlowState, ScreenId};

fn s(value: &str) -> String {
    value.to_string()
}

#[test]
fn test_add_a_main_course_dish() {
    let mut flow = FlowState::new();
    assert_eq!(flow.screen(), ScreenId::Home);

    flow.apply(FlowAction::Next).unwrap();
    assert_eq!(flow.screen(), ScreenId::CourseSelection);

    flow.apply(FlowAction::SelectCourse(s("Main Course"))).unwrap();
    assert_eq!(flow.screen(), ScreenId::Menu);
    assert_eq!(flow.dishes(), [s("Burgers"), s("Meat ")]);

    flow.apply(FlowAction::SelectDish(s("Burgers"))).unwrap();
    assert_eq!(flow.screen(), ScreenId::Details);
    assert_eq!(
        flow.details(),
        &DishDetails {
            name: s("Burgers"),
            description: s(""),
            course: s("Main Course"),
            price: s(""),
        }
    );

    flow.apply(FlowAction::UpdateField(DishField::Price, s("45"))).unwrap();
    assert_eq!(flow.details().price, "45");

    flow.apply(FlowAction::AddDish).unwrap();
    assert_eq!(flow.screen(), ScreenId::Confirmation);

    flow.apply(FlowAction::Done).unwrap();
    assert_eq!(flow.screen(), ScreenId::CourseSelection);
    // The previous selection survives the round trip
    assert_eq!(flow.course(), Some("Main Course"));
    assert_eq!(flow.dishes(), [s("Burgers"), s("Meat ")]);
}

#[test]
fn test_cancel_returns_to_the_same_dish_list() {
    let mut flow = FlowState::new();
    flow.apply(FlowAction::Next).unwrap();
    flow.apply(FlowAction::SelectCourse(s("Starters"))).unwrap();
    flow.apply(FlowAction::SelectDish(s("kebabs"))).unwrap();
    flow.apply(FlowAction::UpdateField(DishField::Description, s("Spicy"))).unwrap();

    let transition = flow.apply(FlowAction::Cancel).unwrap();
    assert_eq!((transition.from, transition.to), (ScreenId::Details, ScreenId::Menu));
    assert_eq!(flow.dishes(), [s("kebabs"), s("sandwiches")]);

    // Picking a dish again starts from an empty form
    flow.apply(FlowAction::SelectDish(s("sandwiches"))).unwrap();
    assert_eq!(flow.details().description, "");
    assert_eq!(flow.details().course, "Starters");
}

#[test]
fn test_every_course_value_has_a_dish_list() {
    let mut flow = FlowState::new();
    for (course, expected) in [
        ("Starters", vec![s("kebabs"), s("sandwiches")]),
        ("Main Course", vec![s("Burgers"), s("Meat ")]),
        ("Desert", vec![s("Malva Pudding"), s("Tarts")]),
        ("Anything else", vec![s("Malva Pudding"), s("Tarts")]),
    ] {
        flow.select_course(course);
        assert_eq!(flow.screen(), ScreenId::Menu);
        assert_eq!(flow.dishes(), expected.as_slice(), "{}", course);
    }
}

#[test]
fn test_back_edges_have_fixed_targets() {
    assert_eq!(target(ScreenId::CourseSelection, &FlowAction::Back), Some(ScreenId::Home));
    assert_eq!(target(ScreenId::Menu, &FlowAction::Back), Some(ScreenId::CourseSelection));
    assert_eq!(target(ScreenId::Details, &FlowAction::Back), None);
    assert_eq!(target(ScreenId::Home, &FlowAction::Back), None);
}

#[test]
fn test_actions_without_an_edge_leave_state_alone() {
    let mut flow = FlowState::new();
    let before = flow.clone();
    assert!(flow.apply(FlowAction::AddDish).is_none());
    assert!(flow.apply(FlowAction::UpdateField(DishField::Name, s("x"))).is_none());
    assert!(flow.apply(FlowAction::SelectDish(s("Tarts"))).is_none());
    assert_eq!(flow, before);
}
