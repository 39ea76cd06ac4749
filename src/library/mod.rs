//! In-memory book library.
//!
//! - `record`: the book variants and the [`Describable`] capability set
//! - `catalog`: the owning collection with add/remove/search/list

pub mod catalog;
pub mod record;

pub use catalog::{Catalog, CatalogError};
pub use record::{Describable, ElectronicBook, PhysicalBook, Record};
