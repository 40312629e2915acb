//! Dish details form record.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One field of [`DishDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishField {
    Name,
    Description,
    Course,
    Price,
}

impl DishField {
    /// Fields shown as inputs on the details screen, in focus order.
    /// The course is carried over from the course selection and not edited.
    pub const EDITABLE: [DishField; 3] = [DishField::Name, DishField::Description, DishField::Price];

    /// Placeholder shown when the input is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            DishField::Name => "Dish Name",
            DishField::Description => "Description",
            DishField::Course => "Course",
            DishField::Price => "Price",
        }
    }
}

impl FromStr for DishField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(DishField::Name),
            "description" => Ok(DishField::Description),
            "course" => Ok(DishField::Course),
            "price" => Ok(DishField::Price),
            _ => Err(format!("Unknown dish field: {}", s)),
        }
    }
}

/// The details entered for a dish.
///
/// Updates never mutate in place: [`DishDetails::with_field`] returns a new
/// record. No field is parsed or validated, including the price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishDetails {
    pub name: String,
    pub description: String,
    pub course: String,
    pub price: String,
}

impl DishDetails {
    /// A fresh record for a picked dish: description and price start empty.
    pub fn for_dish(name: impl Into<String>, course: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            course: course.unwrap_or_default().to_string(),
            price: String::new(),
        }
    }

    /// Read one field.
    pub fn get(&self, field: DishField) -> &str {
        match field {
            DishField::Name => &self.name,
            DishField::Description => &self.description,
            DishField::Course => &self.course,
            DishField::Price => &self.price,
        }
    }

    /// Copy of this record with exactly one field replaced.
    pub fn with_field(&self, field: DishField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            DishField::Name => Self {
                name: value,
                ..self.clone()
            },
            DishField::Description => Self {
                description: value,
                ..self.clone()
            },
            DishField::Course => Self {
                course: value,
                ..self.clone()
            },
            DishField::Price => Self {
                price: value,
                ..self.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DishDetails {
        DishDetails {
            name: "Burgers".to_string(),
            description: "with chips".to_string(),
            course: "Main Course".to_string(),
            price: "45".to_string(),
        }
    }

    #[test]
    fn test_for_dish_clears_description_and_price() {
        let details = DishDetails::for_dish("Tarts", Some("Desert"));
        assert_eq!(details.name, "Tarts");
        assert_eq!(details.course, "Desert");
        assert!(details.description.is_empty());
        assert!(details.price.is_empty());
    }

    #[test]
    fn test_for_dish_without_course() {
        let details = DishDetails::for_dish("kebabs", None);
        assert_eq!(details.course, "");
    }

    #[test]
    fn test_with_field_changes_only_that_field() {
        let before = sample();
        for field in [
            DishField::Name,
            DishField::Description,
            DishField::Course,
            DishField::Price,
        ] {
            let after = before.with_field(field, "changed");
            assert_eq!(after.get(field), "changed");
            for other in [
                DishField::Name,
                DishField::Description,
                DishField::Course,
                DishField::Price,
            ] {
                if other != field {
                    assert_eq!(after.get(other), before.get(other));
                }
            }
        }
        // Original untouched
        assert_eq!(before, sample());
    }

    #[test]
    fn test_price_is_not_validated() {
        let details = sample().with_field(DishField::Price, "forty-five rand");
        assert_eq!(details.price, "forty-five rand");
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("price".parse::<DishField>(), Ok(DishField::Price));
        assert_eq!(" Name ".parse::<DishField>(), Ok(DishField::Name));
        assert!("cost".parse::<DishField>().is_err());
    }
}
