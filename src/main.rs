//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Bookcase library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait, maps
//! keys and clicks to library events, and executes the actions the library
//! returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Mouse, `PermissionRequestResult` events
//! 3. **Permissions**: Once granted, read configured catalog/palette files
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function, keep the view model for clicks
//!
//! # Event Mapping
//!
//! Keys are interpreted according to the input mode, which follows the
//! topmost overlay:
//!
//! Browse (no overlay):
//! - `j`/`Down`, `k`/`Up`: Move cursor
//! - `Enter`: Open the book under the cursor, or show more
//! - `m`: Show more
//! - `/`: Open search
//! - `s`: Open settings
//! - `q`/`Esc`: Hide plugin
//!
//! Search:
//! - Characters: Type into the title input
//! - `Tab`/`Down`, `Shift+Tab`/`Up`: Move field focus
//! - `Left`/`Right`: Change the focused dropdown
//! - `Enter`: Search, `Esc`: Cancel
//!
//! Settings:
//! - `Left`/`Right`/`h`/`l`/`Tab`: Change theme
//! - `Enter`: Save, `Esc`: Cancel
//!
//! Detail:
//! - `Esc`/`Enter`/`q`: Close
//!
//! Mouse:
//! - Left click on a preview row: Open detail
//! - Left click on the "Show more" control: Show more
//! - Scroll: Move cursor

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookcase::catalog::{CatalogSource, JsonCatalogFile};
use bookcase::ui::{HitTarget, Palette, UIViewModel};
use bookcase::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Permissions the plugin asks for on load.
const PERMISSIONS: [PermissionType; 3] = [
    PermissionType::ReadApplicationState,
    PermissionType::ChangeApplicationState,
    PermissionType::FullHdAccess,
];

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the last drawn view model so mouse
/// clicks resolve against what is on screen.
struct State {
    /// Core application state from library layer.
    app: bookcase::app::AppState,

    /// View model from the most recent render.
    last_view: Option<UIViewModel>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: bookcase::initialize(&Config::default()),
            last_view: None,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `ReadApplicationState`: Pane state
    /// - `ChangeApplicationState`: Hide the plugin pane
    /// - `FullHdAccess`: Read catalog and palette files from the host
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookcase::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            catalog_file = ?config.catalog_file,
            page_size = config.page_size,
            preset = config.startup_preset().as_str(),
            "parsed configuration"
        );
        self.app = bookcase::initialize(&config);

        request_permission(&PERMISSIONS);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
            zellij_tile::prelude::Event::Mouse(mouse) => self.map_mouse_event(mouse),
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Some(Self::map_permission_result(status))
            }
            _ => None,
        };

        our_event.is_some_and(|event| self.dispatch(event))
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        self.last_view = Some(bookcase::ui::render(&self.app, rows, cols));
    }
}

impl State {
    /// Runs an event through the library, executing actions and feeding their
    /// results back in until nothing is left.
    fn dispatch(&mut self, event: Event) -> bool {
        let mut pending = vec![event];
        let mut should_render = false;

        while let Some(event) = pending.pop() {
            match handle_event(&mut self.app, &event) {
                Ok((render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = render,
                        "event handled successfully"
                    );
                    should_render |= render;
                    pending.extend(actions.iter().filter_map(Self::execute_action));
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                }
            }
        }

        should_render
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        let shift = key.has_modifiers(&[KeyModifier::Shift]);

        Some(match self.app.input_mode() {
            InputMode::Browse => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::CursorDown,
                BareKey::Up | BareKey::Char('k') => Event::CursorUp,
                BareKey::Enter => Event::Activate,
                BareKey::Char('m') => Event::ShowMore,
                BareKey::Char('/') => Event::OpenSearch,
                BareKey::Char('s') => Event::OpenSettings,
                BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
                _ => return None,
            },
            InputMode::Search(_) => match key.bare_key {
                BareKey::Esc => Event::CancelSearch,
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Tab if shift => Event::FocusPrevField,
                BareKey::Tab | BareKey::Down => Event::FocusNextField,
                BareKey::Up => Event::FocusPrevField,
                BareKey::Left => Event::PrevOption,
                BareKey::Right => Event::NextOption,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Settings => match key.bare_key {
                BareKey::Esc => Event::CancelSettings,
                BareKey::Enter => Event::SubmitSettings,
                BareKey::Left | BareKey::Char('h') => Event::PrevOption,
                BareKey::Right | BareKey::Char('l') | BareKey::Tab => Event::NextOption,
                _ => return None,
            },
            InputMode::Detail => match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Event::CloseDetail,
                _ => return None,
            },
        })
    }

    /// Maps mouse events to application events.
    ///
    /// Clicks are resolved against the view model from the last render.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, _col) => {
                let row = usize::try_from(line).ok()? + 1;
                let target = self.last_view.as_ref()?.hit_test(row)?;
                tracing::debug!(row = row, target = ?target, "click resolved");
                Some(match target {
                    HitTarget::Preview(id) => Event::PreviewClicked { id },
                    HitTarget::LoadMore => Event::ShowMore,
                })
            }
            Mouse::ScrollDown(_) if self.app.input_mode() == InputMode::Browse => {
                Some(Event::CursorDown)
            }
            Mouse::ScrollUp(_) if self.app.input_mode() == InputMode::Browse => {
                Some(Event::CursorUp)
            }
            _ => None,
        }
    }

    /// Maps the permission prompt outcome to application events.
    fn map_permission_result(status: PermissionStatus) -> Event {
        let granted = match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                PERMISSIONS.to_vec()
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - using built-in catalog and palette");
                vec![]
            }
        };
        Event::PermissionsResult { granted }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls and file reads. Loads
    /// report back as events.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) -> Option<Event> {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
                None
            }
            Action::LoadCatalog { path } => {
                let source = JsonCatalogFile::new(path.clone());
                Some(match source.load() {
                    Ok(catalog) => {
                        tracing::info!(books = catalog.len(), source = %source.describe(), "catalog loaded");
                        Event::CatalogLoaded {
                            catalog,
                            label: source.describe(),
                        }
                    }
                    Err(e) => Event::LoadFailed {
                        what: "catalog".to_string(),
                        error: e.to_string(),
                    },
                })
            }
            Action::LoadPalette { path } => Some(match Palette::from_file(path) {
                Ok(palette) => Event::PaletteLoaded(palette),
                Err(e) => Event::LoadFailed {
                    what: "palette".to_string(),
                    error: e.to_string(),
                },
            }),
        }
    }
}
