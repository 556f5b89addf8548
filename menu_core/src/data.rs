pub mod catalog;
pub mod course;
pub mod form;
pub mod item;
pub mod summary;
