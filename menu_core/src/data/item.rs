use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use super::{course::Course, form::ValidationError};

/// A unique ID that can used to refer to a menu item.
///
/// IDs are opaque strings on the wire. IDs generated by a [`Catalog`] are
/// decimal numbers drawn from a counter that only moves forward, so an ID is
/// never handed out twice by the same catalog, even after the item it named
/// has been removed.
///
/// [`Catalog`]: super::catalog::Catalog
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl MenuItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value of this ID, if it is one the counter could have
    /// produced.
    pub(crate) fn as_counter(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuItemId {
    fn from(value: &str) -> Self {
        MenuItemId(value.to_string())
    }
}

impl From<u64> for MenuItemId {
    fn from(value: u64) -> Self {
        MenuItemId(value.to_string())
    }
}

/// One dish in the catalog. This is also the record shape exchanged with the
/// navigation host.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
}

/// The fields of a menu item that passed validation but has not been given an
/// ID yet.
#[derive(Debug, PartialEq, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
}

impl NewMenuItem {
    pub(crate) fn with_id(self, id: MenuItemId) -> MenuItem {
        let NewMenuItem { name, description, course, price } = self;
        MenuItem { id, name, description, course, price }
    }
}

impl MenuItem {
    /// Checks the field rules that every item in a catalog must satisfy. The
    /// course needs no check because the type already restricts it.
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        check_price(self.price)
    }
}

pub(crate) fn check_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::NonPositivePrice { price });
    }
    Ok(())
}

impl Hash for MenuItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let MenuItem { id, name, description, course, price } = self;
        id.hash(state);
        name.hash(state);
        description.hash(state);
        course.hash(state);
        // prices in a catalog are finite and positive, so the bit pattern is
        // unique per value
        price.to_bits().hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn soup() -> MenuItem {
        MenuItem {
            id: "1".into(),
            name: "Soup".to_string(),
            description: "Tomato soup".to_string(),
            course: Course::Starter,
            price: 45.0,
        }
    }

    #[test]
    fn valid_item_passes_check() {
        assert_eq!(soup().check(), Ok(()));
    }

    #[test]
    fn check_rejects_blank_text() {
        let item = MenuItem { name: "  ".to_string(), ..soup() };
        assert_eq!(item.check(), Err(ValidationError::MissingName));

        let item = MenuItem { description: String::new(), ..soup() };
        assert_eq!(item.check(), Err(ValidationError::MissingDescription));
    }

    #[test]
    fn check_rejects_bad_prices() {
        for price in [0.0, -3.5, f64::NAN, f64::INFINITY] {
            let item = MenuItem { price, ..soup() };
            assert!(
                matches!(item.check(), Err(ValidationError::NonPositivePrice { .. })),
                "price {price} should be rejected"
            );
        }
    }

    #[test]
    fn item_wire_shape() {
        let json = serde_json::to_value(soup()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Soup",
                "description": "Tomato soup",
                "course": "Starter",
                "price": 45.0,
            })
        );
    }

    #[test]
    fn counter_ids() {
        assert_eq!(MenuItemId::from(7).as_counter(), Some(7));
        assert_eq!(MenuItemId::from("abc").as_counter(), None);
    }
}
