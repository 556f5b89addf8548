use std::collections::{BTreeMap, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::digest::{hash_of, DigestOutput, Digestible};

use super::{
    course::{Course, CourseFilter},
    form::{MenuItemForm, ValidationError},
    item::{MenuItem, MenuItemId, NewMenuItem},
    summary::{summarize, CourseSummary},
};

/// The ordered collection of menu items. Items keep the order in which they
/// were added and no two items share an ID.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Catalog {
    manifest: CatalogManifest,
    items: Vec<MenuItem>,
}

#[derive(Debug, PartialEq, Clone)]
struct CatalogManifest {
    /// The next counter value to be tried as an item ID.
    next_item_id: u64,
}

/// Error type for building a catalog out of existing records.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("menu item ID {id} appears more than once")]
    DuplicateId { id: MenuItemId },
    #[error("menu item {id} is invalid: {source}")]
    InvalidRecord {
        id: MenuItemId,
        #[source]
        source: ValidationError,
    },
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Builds a catalog out of records received from elsewhere, keeping their
    /// order and IDs. Every record must satisfy the catalog's field rules and
    /// IDs must be distinct. Newly generated IDs continue after the largest
    /// numeric ID among the records that still leaves room above it.
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            item.check()
                .map_err(|source| CatalogError::InvalidRecord { id: item.id.clone(), source })?;
            if !seen.insert(&item.id) {
                return Err(CatalogError::DuplicateId { id: item.id.clone() });
            }
        }

        let next_item_id = items
            .iter()
            .filter_map(|item| item.id.as_counter()?.checked_add(1))
            .max()
            .unwrap_or(CatalogManifest::FIRST_ITEM_ID);

        Ok(Catalog { manifest: CatalogManifest { next_item_id }, items })
    }

    /// Moves the ID counter forward to at least `next_item_id`, so that IDs
    /// handed out before the catalog was passed along are not generated
    /// again. Never moves the counter back.
    pub fn resume_ids_from(&mut self, next_item_id: u64) {
        let next_item_id = next_item_id.max(CatalogManifest::FIRST_ITEM_ID);
        self.manifest.next_item_id = self.manifest.next_item_id.max(next_item_id);
    }

    // Returns a unique `MenuItemId` and marks that ID as used. Counter values
    // that collide with an ID already in the catalog (possible when it was
    // seeded from outside) are skipped. Past `u64::MAX` the counter starts
    // over at `FIRST_ITEM_ID`; the catalog can never hold every counter value,
    // so the loop always finds a free one.
    fn gen_unique_item_id(&mut self) -> MenuItemId {
        loop {
            let candidate = self.manifest.next_item_id;
            self.manifest.next_item_id =
                candidate.checked_add(1).unwrap_or(CatalogManifest::FIRST_ITEM_ID);
            let id = MenuItemId::from(candidate);
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Appends an already validated item, returning the ID it was stored
    /// under.
    pub fn insert(&mut self, item: NewMenuItem) -> MenuItemId {
        let id = self.gen_unique_item_id();
        debug!(%id, name = %item.name, course = %item.course, "appending menu item");
        self.items.push(item.with_id(id.clone()));
        id
    }

    /// Validates the form and appends the resulting item. On failure the
    /// catalog is left untouched.
    pub fn add(&mut self, form: &MenuItemForm) -> Result<MenuItemId, ValidationError> {
        let item = form.validate()?;
        Ok(self.insert(item))
    }

    /// Removes the item with the given ID, returning it. Removing an ID that
    /// is not present does nothing.
    pub fn remove(&mut self, id: &MenuItemId) -> Option<MenuItem> {
        self.take(id).map(|(_, item)| item)
    }

    /// Like `remove`, but also reports the position the item was at.
    pub(crate) fn take(&mut self, id: &MenuItemId) -> Option<(usize, MenuItem)> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some((index, self.items.remove(index)))
    }

    /// Puts an item back at the position it was taken from. Only meant for
    /// undoing a `take`.
    pub(crate) fn restore(&mut self, index: usize, item: MenuItem) {
        self.items.insert(index, item);
    }

    /// Undoes the most recent `insert`, including the advance of the ID
    /// counter. `next_item_id` must be the counter value from before that
    /// insert.
    pub(crate) fn retract_last(&mut self, next_item_id: u64) -> Option<MenuItem> {
        let item = self.items.pop();
        self.manifest.next_item_id = next_item_id;
        item
    }

    pub(crate) fn next_item_id(&self) -> u64 {
        self.manifest.next_item_id
    }

    pub fn get(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &MenuItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items whose course the filter selects, in catalog order.
    pub fn filter(&self, selector: CourseFilter) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| selector.matches(item.course)).collect()
    }

    /// Count and average price of every course that has at least one item.
    pub fn summary(&self) -> BTreeMap<Course, CourseSummary> {
        summarize(&self.items)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Digestible for Catalog {
    fn digest(&self) -> DigestOutput {
        hash_of(&(self.manifest.next_item_id, &self.items))
    }
}

impl CatalogManifest {
    const FIRST_ITEM_ID: u64 = 1;
}

impl Default for CatalogManifest {
    fn default() -> Self {
        CatalogManifest { next_item_id: Self::FIRST_ITEM_ID }
    }
}
