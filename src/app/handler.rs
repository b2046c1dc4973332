//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! load results, translating them into state changes and action sequences. It
//! is where the UI controls get wired to the controllers.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (already mapped from keys/clicks)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **List**: `CursorDown`, `CursorUp`, `Activate`, `ShowMore`, `PreviewClicked`
//! - **Overlays**: `OpenSearch`, `OpenSettings`, `Submit*`, `Cancel*`, `CloseDetail`
//! - **Form input**: `FocusNextField`, `FocusPrevField`, `NextOption`,
//!   `PrevOption`, `Char`, `Backspace`
//! - **System**: `PermissionsResult`, `CatalogLoaded`, `PaletteLoaded`, `LoadFailed`

use super::overlay::Overlay;
use super::state::CursorTarget;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Catalog;
use crate::ui::theme::Palette;
use zellij_tile::prelude::PermissionType;

/// Events triggered by user input or by the results of earlier actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list cursor down (wraps to top).
    CursorDown,
    /// Moves the list cursor up (wraps to the "Show more" control).
    CursorUp,
    /// Enter on the list: opens the book under the cursor, or shows more if
    /// the cursor is on the "Show more" control.
    Activate,
    /// Reveals the next page of matches.
    ShowMore,
    /// A preview row was clicked.
    PreviewClicked {
        /// Book id the row is tagged with.
        id: String,
    },

    /// Opens the search overlay with the title input focused.
    OpenSearch,
    /// Opens the settings overlay with the active preset pre-selected.
    OpenSettings,
    /// Applies the search form and closes the search overlay.
    SubmitSearch,
    /// Closes the search overlay without filtering.
    CancelSearch,
    /// Applies the selected preset and closes the settings overlay.
    SubmitSettings,
    /// Closes the settings overlay without changing the theme.
    CancelSettings,
    /// Closes the detail panel.
    CloseDetail,

    /// Moves search form focus to the next field.
    FocusNextField,
    /// Moves search form focus to the previous field.
    FocusPrevField,
    /// Cycles the focused dropdown (or the theme select) forward.
    NextOption,
    /// Cycles the focused dropdown (or the theme select) backward.
    PrevOption,
    /// Types a character into the search title input.
    Char(char),
    /// Deletes the last character of the search title input.
    Backspace,

    /// Hides the plugin pane.
    CloseFocus,

    /// Reports granted Zellij permissions.
    ///
    /// Configured catalog and palette files are only requested once
    /// filesystem access has been granted.
    PermissionsResult {
        /// Permissions granted by the user.
        granted: Vec<PermissionType>,
    },

    /// A configured catalog file was read and validated.
    CatalogLoaded {
        catalog: Catalog,
        /// Header label for the new catalog.
        label: String,
    },

    /// A configured palette file was read.
    PaletteLoaded(Palette),

    /// Loading a configured file failed. The current data stays in place.
    LoadFailed {
        /// What was being loaded (`catalog` or `palette`).
        what: String,
        /// Error message.
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether the UI needs a re-render, plus the actions to execute in sequence.
///
/// # Errors
///
/// Currently every event is handled infallibly; the `Result` keeps the
/// signature stable for handlers that do I/O-adjacent work.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::Activate => match state.cursor_target() {
            CursorTarget::Preview(id) => Ok((state.open_detail(&id), vec![])),
            CursorTarget::LoadMore => Ok((state.show_more(), vec![])),
        },
        Event::ShowMore => Ok((state.show_more(), vec![])),
        Event::PreviewClicked { id } => {
            tracing::debug!(book_id = %id, "preview clicked");
            Ok((state.open_detail(id), vec![]))
        }

        Event::OpenSearch => {
            state.search_form.focus = super::SearchField::Title;
            state.overlays.open(Overlay::Search);
            Ok((true, vec![]))
        }
        Event::OpenSettings => {
            state.settings_form.preset = state.theme.preset();
            state.overlays.open(Overlay::Settings);
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            let filters = state.search_form.filters();
            tracing::debug!(
                title = %filters.title,
                author = ?filters.author,
                genre = ?filters.genre,
                "search submitted"
            );
            state.apply_filters(&filters);
            state.overlays.close(Overlay::Search);
            Ok((true, vec![]))
        }
        Event::CancelSearch => {
            state.overlays.close(Overlay::Search);
            Ok((true, vec![]))
        }
        Event::SubmitSettings => {
            let preset = state.settings_form.preset;
            state.apply_preset(preset);
            state.overlays.close(Overlay::Settings);
            Ok((true, vec![]))
        }
        Event::CancelSettings => {
            state.overlays.close(Overlay::Settings);
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            state.overlays.close(Overlay::Detail);
            Ok((true, vec![]))
        }

        Event::FocusNextField => {
            state.search_form.focus = state.search_form.focus.next();
            Ok((true, vec![]))
        }
        Event::FocusPrevField => {
            state.search_form.focus = state.search_form.focus.prev();
            Ok((true, vec![]))
        }
        Event::NextOption | Event::PrevOption => {
            let delta = if matches!(event, Event::NextOption) { 1 } else { -1 };

            match state.overlays.topmost() {
                Some(Overlay::Settings) => {
                    state.settings_form.preset = state.settings_form.preset.toggled();
                    Ok((true, vec![]))
                }
                Some(Overlay::Search) => Ok((state.search_form.cycle_focused(delta), vec![])),
                _ => Ok((false, vec![])),
            }
        }
        Event::Char(c) => {
            if state.overlays.topmost() != Some(Overlay::Search) {
                return Ok((false, vec![]));
            }
            let changed = state.search_form.push_char(*c);
            tracing::trace!(title = %state.search_form.title, char = %c, "title input updated");
            Ok((changed, vec![]))
        }
        Event::Backspace => {
            if state.overlays.topmost() != Some(Overlay::Search) {
                return Ok((false, vec![]));
            }
            Ok((state.search_form.pop_char(), vec![]))
        }

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::PermissionsResult { granted } => {
            if !granted.contains(&PermissionType::FullHdAccess) {
                tracing::debug!("filesystem access not granted, keeping built-in data");
                return Ok((false, vec![]));
            }

            let mut actions = vec![];
            if let Some(path) = &state.sources.catalog_file {
                actions.push(Action::LoadCatalog { path: path.clone() });
            }
            if let Some(path) = &state.sources.palette_file {
                actions.push(Action::LoadPalette { path: path.clone() });
            }
            Ok((false, actions))
        }
        Event::CatalogLoaded { catalog, label } => {
            state.replace_catalog(catalog.clone(), label);
            Ok((true, vec![]))
        }
        Event::PaletteLoaded(palette) => {
            tracing::debug!(palette = %palette.name, "palette loaded");
            state.replace_palette(palette.clone());
            Ok((true, vec![]))
        }
        Event::LoadFailed { what, error } => {
            tracing::error!(what = %what, error = %error, "load failed, keeping current data");
            Ok((false, vec![]))
        }
    }
}
