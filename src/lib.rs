//! Bookcase: a Zellij plugin for browsing a book catalog.
//!
//! Bookcase shows a catalog of books as a paginated preview list and
//! provides:
//! - "Show more" pagination with a remaining-count label
//! - A search overlay filtering by title, author and genre
//! - A detail panel for the selected book
//! - Day/night theme presets over a configurable palette
//! - Optional JSON catalog and TOML palette files read from the host

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event wiring                                     │
//! │  - List, filter, overlay controllers                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │
//! │ (ui/)         │   │ (catalog/)    │
//! │ - Rendering   │   │ - JSON I/O    │
//! │ - Theming     │   │ - Sources     │
//! │ - Components  │   │ - Built-in    │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Core types
//! │  - Error types (domain/error)                       │
//! │  - Book and catalog model                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Catalog loading (built-in, JSON files)
//! - [`domain`]: Core domain types (Book, Catalog, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookcase.wasm" {
//!         catalog_file "~/books/catalog.json"
//!         page_size "36"
//!         color_scheme "dark"
//!         palette "sepia"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Create `AppState` over the built-in catalog with the startup preset
//!    - Request permissions and subscribe to key/mouse events
//!
//! 2. **Permissions Granted**:
//!    - Read the configured catalog and palette files, if any
//!    - Swap them in, or log the failure and keep the built-in data
//!
//! 3. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components with ANSI styling
//!    - Keep the view model for mouse hit-testing

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchField};
pub use domain::{Book, BookcaseError, Catalog, Result};
pub use ui::Theme;

use app::list::DEFAULT_PAGE_SIZE;
use app::state::Sources;
use infrastructure::resolve_config_path;
use std::collections::BTreeMap;
use ui::{ColorScheme, Palette, ThemePreset};

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/bookcase.wasm" {
///     catalog_file "~/books/catalog.json"
///     page_size "24"
///     theme "night"
///     palette_file "~/.config/bookcase/palette.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog file to show instead of the built-in catalog.
    ///
    /// `~` and relative paths are resolved under the host root. Read once filesystem
    /// access is granted.
    pub catalog_file: Option<String>,

    /// Books revealed per "Show more". Default: 36
    pub page_size: usize,

    /// Explicit startup preset (`day` or `night`). Overrides `color_scheme`.
    pub theme: Option<ThemePreset>,

    /// The host's light/dark preference (`light` or `dark`).
    ///
    /// `dark` starts in the night preset; absent or `light` starts in day.
    pub color_scheme: Option<ColorScheme>,

    /// Built-in palette name (`classic`, `sepia`). Ignored if
    /// `palette_file` loads successfully.
    pub palette: Option<String>,

    /// Path to a custom TOML palette file.
    pub palette_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            theme: None,
            color_scheme: None,
            palette: None,
            palette_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `page_size`: positive integer, falls back to 36
    /// - `theme`: `day`/`night`, dropped if unrecognized
    /// - `color_scheme`: `light`/`dark`, dropped if unrecognized
    /// - everything else is taken verbatim; blank values count as absent
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookcase::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "12".to_string());
    /// map.insert("color_scheme".to_string(), "dark".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 12);
    /// assert!(config.color_scheme.is_some());
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&size| size > 0)
            .unwrap_or_else(|| {
                if let Some(raw) = config.get("page_size") {
                    tracing::debug!(page_size = %raw, "invalid page size, using default");
                }
                DEFAULT_PAGE_SIZE
            });

        let theme = text("theme").and_then(|raw| {
            raw.parse::<ThemePreset>()
                .map_err(|e| tracing::debug!(error = %e, "ignoring theme setting"))
                .ok()
        });

        let color_scheme = text("color_scheme").and_then(|raw| {
            raw.parse::<ColorScheme>()
                .map_err(|e| tracing::debug!(error = %e, "ignoring color scheme setting"))
                .ok()
        });

        Self {
            catalog_file: text("catalog_file"),
            page_size,
            theme,
            color_scheme,
            palette: text("palette"),
            palette_file: text("palette_file"),
            trace_level: text("trace_level"),
        }
    }

    /// The preset to start in: explicit `theme`, else derived from
    /// `color_scheme`, else day.
    #[must_use]
    pub fn startup_preset(&self) -> ThemePreset {
        self.theme
            .unwrap_or_else(|| ThemePreset::from_color_scheme(self.color_scheme))
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` over the built-in catalog, with the named palette
/// (or the default) and the startup preset applied. Configured files are not
/// read here: they are recorded in [`AppState::sources`] and requested once
/// filesystem access is granted.
///
/// # Example
///
/// ```rust
/// use bookcase::{initialize, Config, InputMode};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.input_mode(), InputMode::Browse);
/// assert_eq!(state.list.previews().len(), state.catalog.len().min(36));
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookcase plugin");

    let palette = config.palette.as_ref().map_or_else(Palette::default, |name| {
        Palette::from_name(name).unwrap_or_else(|| {
            tracing::debug!(palette = %name, "unknown palette, using default");
            Palette::default()
        })
    });
    let theme = Theme::new(palette, config.startup_preset());

    let mut state = AppState::new(catalog::builtin(), "built-in", theme, config.page_size);
    state.sources = Sources {
        catalog_file: config
            .catalog_file
            .as_deref()
            .map(resolve_config_path),
        palette_file: config
            .palette_file
            .as_deref()
            .map(resolve_config_path),
    };

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_unconfigured() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.page_size, 36);
        assert_eq!(config.startup_preset(), ThemePreset::Day);
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("page_size", "0"),
            ("theme", "dusk"),
            ("color_scheme", "purple"),
            ("catalog_file", "  "),
        ]));
        assert_eq!(config.page_size, 36);
        assert!(config.theme.is_none());
        assert!(config.color_scheme.is_none());
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn dark_scheme_starts_at_night_unless_theme_overrides() {
        let config = Config::from_zellij(&map(&[("color_scheme", "dark")]));
        assert_eq!(config.startup_preset(), ThemePreset::Night);

        let config = Config::from_zellij(&map(&[("color_scheme", "dark"), ("theme", "day")]));
        assert_eq!(config.startup_preset(), ThemePreset::Day);

        let config = Config::from_zellij(&map(&[("color_scheme", "light")]));
        assert_eq!(config.startup_preset(), ThemePreset::Day);
    }

    #[test]
    fn initialize_resolves_files_into_the_sandbox() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", "~/books/catalog.json"),
            ("palette_file", "/host/palettes/warm.toml"),
            ("palette", "sepia"),
            ("page_size", "5"),
        ]));
        let state = initialize(&config);

        assert_eq!(
            state.sources.catalog_file,
            Some(PathBuf::from("/host/books/catalog.json"))
        );
        assert_eq!(
            state.sources.palette_file,
            Some(PathBuf::from("/host/palettes/warm.toml"))
        );
        assert_eq!(state.theme.palette_name(), "sepia");
        assert_eq!(state.list.previews().len(), 5);
    }

    #[test]
    fn initialize_with_unknown_palette_uses_default() {
        let config = Config::from_zellij(&map(&[("palette", "neon")]));
        let state = initialize(&config);
        assert_eq!(state.theme.palette_name(), Palette::default().name);
    }
}
