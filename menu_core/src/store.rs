use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::{
    data::{
        catalog::Catalog,
        course::{Course, CourseFilter},
        form::{MenuItemForm, ValidationError},
        item::{MenuItem, MenuItemId},
        summary::CourseSummary,
    },
    digest::{DigestOutput, Digestible},
    payload::{NavigationParams, PayloadError},
};

use self::transaction::{execute_all_or_roll_back, CatalogEdit, Transaction, TransactionError};

pub mod transaction;

/// Owns the one catalog of the application. Screens read projections of it
/// and send their edits here instead of keeping copies of their own.
#[derive(Debug)]
pub struct MenuStore {
    /// The current catalog. Every edit that went through the store is
    /// reflected here.
    catalog: Catalog,
    /// Digest of `catalog`, kept up to date after every edit so that readers
    /// can cheaply tell whether the projection they hold is stale.
    version: DigestOutput,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::with_catalog(Catalog::new())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let version = catalog.digest();
        Self { catalog, version }
    }

    /// Creates a store holding the catalog handed over by the navigation host.
    pub fn from_payload(params: NavigationParams) -> Result<Self, PayloadError> {
        let catalog = params.into_catalog()?;
        info!(items = catalog.len(), "seeded menu store from navigation payload");
        Ok(Self::with_catalog(catalog))
    }

    /// The payload to pass along when handing control to another screen.
    pub fn to_payload(&self) -> NavigationParams {
        NavigationParams::from(&self.catalog)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// An owned copy of the current catalog, for consumers that outlive a
    /// borrow of the store.
    pub fn snapshot(&self) -> Catalog {
        self.catalog.clone()
    }

    pub fn version(&self) -> DigestOutput {
        self.version
    }

    fn refresh_version(&mut self) {
        self.version = self.catalog.digest();
    }

    /// Validates the form and appends the new item. A rejected form leaves the
    /// store untouched.
    pub fn add(&mut self, form: &MenuItemForm) -> Result<MenuItemId, ValidationError> {
        match self.catalog.add(form) {
            Ok(id) => {
                self.refresh_version();
                info!(%id, items = self.catalog.len(), "menu item added");
                Ok(id)
            }
            Err(err) => {
                warn!(error = %err, "rejected menu item");
                Err(err)
            }
        }
    }

    /// Removes the item with the given ID if there is one. Removing an unknown
    /// ID is not an error and changes nothing.
    pub fn remove(&mut self, id: &MenuItemId) -> Option<MenuItem> {
        let removed = self.catalog.remove(id);
        match &removed {
            Some(item) => {
                self.refresh_version();
                info!(%id, name = %item.name, items = self.catalog.len(), "menu item removed");
            }
            None => debug!(%id, "no menu item to remove"),
        }
        removed
    }

    /// Applies a single edit.
    pub fn apply(&mut self, edit: CatalogEdit) -> Result<(), TransactionError> {
        edit.execute(&mut self.catalog)?;
        self.refresh_version();
        debug!(?edit, "applied catalog edit");
        Ok(())
    }

    /// Applies the edits in order, all or nothing. On failure the store is
    /// left as it was and the error is returned along with the index of the
    /// edit that failed. Returns the number of edits applied.
    pub fn apply_all<I>(&mut self, edits: I) -> Result<usize, (TransactionError, usize)>
    where
        I: IntoIterator<Item = CatalogEdit>,
    {
        match execute_all_or_roll_back(&mut self.catalog, edits) {
            Ok(history) => {
                self.refresh_version();
                info!(edits = history.len(), items = self.catalog.len(), "applied catalog edits");
                Ok(history.len())
            }
            Err((error, index)) => {
                warn!(%error, index, "catalog edits rolled back");
                Err((error, index))
            }
        }
    }

    pub fn filter(&self, selector: CourseFilter) -> Vec<&MenuItem> {
        self.catalog.filter(selector)
    }

    pub fn summary(&self) -> BTreeMap<Course, CourseSummary> {
        self.catalog.summary()
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}
