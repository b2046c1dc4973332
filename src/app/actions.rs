//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches the filesystem or the Zellij API itself. It
//! returns a `Vec<Action>` and the plugin shim executes them in order, feeding
//! any results back in as new events.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::Action;
//! use std::path::PathBuf;
//!
//! let actions = vec![
//!     Action::LoadCatalog { path: PathBuf::from("/host/books/catalog.json") },
//! ];
//! ```

use std::path::PathBuf;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Reads a JSON catalog file and reports back with
    /// [`Event::CatalogLoaded`](super::Event::CatalogLoaded) or
    /// [`Event::LoadFailed`](super::Event::LoadFailed).
    LoadCatalog {
        /// Sandbox path of the catalog file.
        path: PathBuf,
    },

    /// Reads a TOML palette file and reports back with
    /// [`Event::PaletteLoaded`](super::Event::PaletteLoaded) or
    /// [`Event::LoadFailed`](super::Event::LoadFailed).
    LoadPalette {
        /// Sandbox path of the palette file.
        path: PathBuf,
    },
}
