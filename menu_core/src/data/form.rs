use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    course::Course,
    item::{check_price, NewMenuItem},
};

/// The raw contents of the add-item form. Every field is text exactly as the
/// user entered it; an empty `course` is the "Select Course" placeholder.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MenuItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub price: String,
}

/// Why a submitted form was rejected. Variants are listed in the order the
/// rules are checked.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ValidationError {
    #[error("Please enter a dish name.")]
    MissingName,
    #[error("Please enter a description.")]
    MissingDescription,
    #[error("Please select a course.")]
    MissingCourse,
    #[error("Unknown course {input:?}; choose Starter, Main or Dessert.")]
    UnknownCourse { input: String },
    #[error("Please enter a price.")]
    MissingPrice,
    #[error("{input:?} is not a valid price.")]
    InvalidPrice { input: String },
    #[error("Please enter a valid positive price (got {price}).")]
    NonPositivePrice { price: f64 },
}

impl MenuItemForm {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        MenuItemForm {
            name: name.into(),
            description: description.into(),
            course: course.into(),
            price: price.into(),
        }
    }

    /// Checks the form and converts it into the fields of a new item. The
    /// first violated rule is reported. Name and description are kept exactly
    /// as entered.
    pub fn validate(&self) -> Result<NewMenuItem, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        let course: Course = self.course.parse()?;
        let price = parse_price(&self.price)?;
        Ok(NewMenuItem {
            name: self.name.clone(),
            description: self.description.clone(),
            course,
            price,
        })
    }

    pub fn clear(&mut self) {
        *self = MenuItemForm::default();
    }
}

/// Parses the price field. The whole trimmed text must be a number; trailing
/// garbage such as "12abc" is rejected.
pub fn parse_price(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingPrice);
    }
    let price: f64 =
        trimmed.parse().map_err(|_| ValidationError::InvalidPrice { input: input.to_string() })?;
    if !price.is_finite() {
        // "inf" and "NaN" parse as floats but are not prices
        return Err(ValidationError::InvalidPrice { input: input.to_string() });
    }
    check_price(price)?;
    Ok(price)
}
