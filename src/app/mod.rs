//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin shim (main.rs) and the domain/catalog
//! layers. Every user interaction becomes an [`Event`], [`handle_event`] mutates
//! [`AppState`] through the controllers below, and side effects come back out as
//! [`Action`]s.
//!
//! ```text
//! Key/Mouse → Event → handle_event → AppState mutations → Actions → Side Effects
//!                          ↑                                  ↓
//!                          └─────── load results (events) ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Title/author/genre filtering over the catalog
//! - [`forms`]: Search and settings form state
//! - [`handler`]: Event processing and event wiring
//! - [`list`]: Paginated preview list and the "Show more" control
//! - [`modes`]: Input mode and search-field focus types
//! - [`overlay`]: Search/settings/detail panels
//! - [`preview`]: List entries for individual books
//! - [`state`]: Central application state and view model computation
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::{handle_event, AppState, Event};
//! use bookcase::catalog;
//! use bookcase::ui::Theme;
//!
//! let mut state = AppState::new(catalog::builtin(), "built-in", Theme::default(), 4);
//! let (should_render, actions) = handle_event(&mut state, &Event::ShowMore)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.list.page(), 2);
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

pub mod actions;
pub mod filter;
pub mod forms;
pub mod handler;
pub mod list;
pub mod modes;
pub mod overlay;
pub mod preview;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchField};
pub use state::AppState;
