//! Domain layer for the Bookcase plugin.
//!
//! Core types for the catalog being browsed, independent of Zellij APIs and of
//! how the catalog is loaded.
//!
//! # Organization
//!
//! - [`book`]: The `Book` record
//! - [`catalog`]: The read-only dataset (books plus author and genre names)
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use bookcase::catalog;
//!
//! let catalog = catalog::builtin();
//! assert!(catalog.find("dune").is_some());
//! ```

pub mod book;
pub mod catalog;
pub mod error;

pub use book::Book;
pub use catalog::{Catalog, NameMap};
pub use error::{BookcaseError, Result};
