//! The parameter payload exchanged with the navigation host. A screen that
//! hands control to another one passes the current catalog as an ordered list
//! of records under `menu_items`, along with the counter value its catalog
//! would have generated the next ID from, under `next_item_id`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::{
    catalog::{Catalog, CatalogError},
    item::MenuItem,
};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationParams {
    /// Absent when the navigating screen had nothing to hand over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_items: Option<Vec<MenuItem>>,
    /// Lets the receiving catalog avoid IDs of items that were deleted before
    /// the handover. Payloads from hosts that do not track it omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_item_id: Option<u64>,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed navigation payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("navigation payload holds an invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

impl NavigationParams {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the catalog carried by this payload. A payload without
    /// `menu_items` gives an empty catalog. New IDs start after both the
    /// largest numeric ID present and `next_item_id`.
    pub fn into_catalog(self) -> Result<Catalog, PayloadError> {
        let mut catalog = match self.menu_items {
            Some(items) => Catalog::from_items(items)?,
            None => Catalog::new(),
        };
        if let Some(next_item_id) = self.next_item_id {
            catalog.resume_ids_from(next_item_id);
        }
        Ok(catalog)
    }
}

impl From<&Catalog> for NavigationParams {
    fn from(catalog: &Catalog) -> Self {
        NavigationParams {
            menu_items: Some(catalog.items().to_vec()),
            next_item_id: Some(catalog.next_item_id()),
        }
    }
}
