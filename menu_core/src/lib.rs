//! In-memory model for a restaurant menu: the catalog of dishes, the edits
//! that can be applied to it, and the read-only projections that screens
//! render.

pub mod data;
pub mod digest;
pub mod payload;
pub mod store;

pub use data::{
    catalog::{Catalog, CatalogError},
    course::{Course, CourseFilter},
    form::{MenuItemForm, ValidationError},
    item::{MenuItem, MenuItemId},
    summary::{summarize, CourseSummary},
};
pub use payload::{NavigationParams, PayloadError};
pub use store::{transaction::CatalogEdit, MenuStore};
