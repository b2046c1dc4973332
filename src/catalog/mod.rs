//! Catalog loading layer.
//!
//! Turns catalog sources into validated [`Catalog`](crate::domain::Catalog)
//! values. Two sources exist: the catalog embedded in the plugin binary, used at
//! startup and as the fallback, and a JSON catalog file named by the
//! `catalog_file` configuration key.
//!
//! # Modules
//!
//! - `source`: The [`CatalogSource`] trait and the JSON file source
//! - `json`: JSON catalog file format and parsing

pub mod json;
pub mod source;

pub use json::{load_catalog, parse_catalog};
pub use source::{CatalogSource, JsonCatalogFile};

use crate::domain::Catalog;

/// Catalog JSON compiled into the plugin.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Returns the catalog embedded in the plugin binary.
///
/// # Panics
///
/// Panics if the embedded catalog fails to parse (should never occur; covered
/// by tests).
#[must_use]
pub fn builtin() -> Catalog {
    parse_catalog(BUILTIN_CATALOG).expect("built-in catalog should always parse")
}
