//! bookshelf - In-memory library of books and ebooks
//!
//! An interactive console application that keeps a catalog of physical and
//! electronic books for the lifetime of the process.
//!
//! # Modules
//!
//! - `library`: Record variants and the catalog that owns them
//! - `cli`: Command-line parsing and the interactive menu loop
//! - `config`: Optional YAML configuration for the front end
//!
//! # Usage
//!
//! ```bash
//! # Start the interactive menu
//! bookshelf
//!
//! # Preload books from a config file
//! bookshelf --config shelf.yaml
//!
//! # Show resolved configuration
//! bookshelf config
//! ```

pub mod cli;
pub mod config;
pub mod library;

// Re-export main types at crate root for convenience
pub use library::{Catalog, CatalogError, Describable, ElectronicBook, PhysicalBook, Record};
