//! Menu catalog: the offered courses and the dishes listed under each.
//!
//! The catalog is a static lookup table. Anything that is not "Starters" or
//! "Main Course" falls through to the dessert list, including "Desert" itself.

use std::fmt;
use std::str::FromStr;

/// Dishes listed under "Starters".
pub const STARTER_DISHES: [&str; 2] = ["kebabs", "sandwiches"];

/// Dishes listed under "Main Course". The trailing space in "Meat " is part of the name.
pub const MAIN_COURSE_DISHES: [&str; 2] = ["Burgers", "Meat "];

/// Dishes listed for any other course.
pub const DESERT_DISHES: [&str; 2] = ["Malva Pudding", "Tarts"];

/// A course offered on the course selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    Starters,
    MainCourse,
    Desert,
}

impl Course {
    /// All courses in display order.
    pub const ALL: [Course; 3] = [Course::Starters, Course::MainCourse, Course::Desert];

    /// The label shown on the course button, which is also the stored course value.
    pub fn label(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::MainCourse => "Main Course",
            Course::Desert => "Desert",
        }
    }

    /// Parse an exact course label.
    pub fn from_label(label: &str) -> Option<Course> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Dishes listed under this course.
    pub fn dishes(&self) -> Vec<String> {
        dishes_for(self.label())
    }

    /// Index in display order.
    pub fn to_index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Course at a display index.
    pub fn from_index(index: usize) -> Option<Course> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("Unknown course: {}", s))
    }
}

/// Look up the dishes for a course value.
///
/// Only "Starters" and "Main Course" have their own entries; every other
/// value gets the dessert list.
pub fn dishes_for(course: &str) -> Vec<String> {
    let dishes: &[&str] = match course {
        "Starters" => &STARTER_DISHES,
        "Main Course" => &MAIN_COURSE_DISHES,
        _ => &DESERT_DISHES,
    };
    dishes.iter().map(|d| (*d).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starters_lookup() {
        assert_eq!(dishes_for("Starters"), vec!["kebabs", "sandwiches"]);
    }

    #[test]
    fn test_main_course_keeps_trailing_space() {
        let dishes = dishes_for("Main Course");
        assert_eq!(dishes, vec!["Burgers", "Meat "]);
        assert!(dishes[1].ends_with(' '));
    }

    #[test]
    fn test_unknown_values_fall_through_to_desert_list() {
        for course in ["Desert", "Dessert", "", "starters", "Soup"] {
            assert_eq!(dishes_for(course), vec!["Malva Pudding", "Tarts"], "{course:?}");
        }
    }

    #[test]
    fn test_course_labels_and_order() {
        let labels: Vec<_> = Course::ALL.iter().map(Course::label).collect();
        assert_eq!(labels, vec!["Starters", "Main Course", "Desert"]);
        assert_eq!(Course::MainCourse.to_index(), 1);
        assert_eq!(Course::from_index(2), Some(Course::Desert));
        assert_eq!(Course::from_index(3), None);
    }

    #[test]
    fn test_course_parse() {
        assert_eq!("Main Course".parse::<Course>(), Ok(Course::MainCourse));
        assert!("main course".parse::<Course>().is_err());
        assert_eq!(Course::Desert.dishes(), dishes_for("anything"));
    }
}
