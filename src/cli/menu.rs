//! `kitchen dishes` and `kitchen courses`.

use crate::menu::{dishes_for, Course};
use anyhow::{Context, Result};
use std::io::Write;

/// Print the dishes for `course`, one per line or as a JSON array.
///
/// Uses the same lookup as the menu screen, so an unknown course prints
/// the dessert list.
pub fn print_dishes(out: &mut impl Write, course: &str, json: bool) -> Result<()> {
    let dishes = dishes_for(course);
    if json {
        let encoded = serde_json::to_string_pretty(&dishes).context("Failed to encode dishes")?;
        writeln!(out, "{}", encoded)?;
    } else {
        for dish in &dishes {
            writeln!(out, "{}", dish)?;
        }
    }
    Ok(())
}

pub fn print_courses(out: &mut impl Write) -> Result<()> {
    for course in Course::ALL {
        writeln!(out, "{}", course.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_print_dishes_lines() {
        let text = output(|out| print_dishes(out, "Main Course", false));
        assert_eq!(text, "Burgers\nMeat \n");
    }

    #[test]
    fn test_print_dishes_json() {
        let text = output(|out| print_dishes(out, "Starters", true));
        let parsed: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec!["kebabs", "sandwiches"]);
    }

    #[test]
    fn test_unknown_course_falls_through_to_desert() {
        let text = output(|out| print_dishes(out, "Soup", false));
        assert_eq!(text, "Malva Pudding\nTarts\n");
    }

    #[test]
    fn test_print_courses() {
        let text = output(|out| print_courses(out));
        assert_eq!(text, "Starters\nMain Course\nDesert\n");
    }
}
