//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering: rows are already windowed to the
//! pane height, labels are already formatted and the detail description is
//! already wrapped.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data. The
//! plugin keeps the last one around to resolve mouse clicks with
//! [`UIViewModel::hit_test`].

use crate::app::SearchField;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, counts, shortcuts).
    pub header: HeaderInfo,

    /// Previews visible in the list window.
    pub display_items: Vec<DisplayItem>,

    /// The "Show more" control below the list.
    pub load_more: LoadMoreInfo,

    /// Optional empty state message (when nothing matches).
    pub empty_state: Option<EmptyState>,

    /// The overlay drawn on top of the list, if any.
    pub overlay: Option<OverlayView>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Screen rows of the clickable regions.
    pub layout: ListLayout,
}

impl UIViewModel {
    /// Maps a 1-indexed screen row to the clickable element drawn there.
    ///
    /// Returns `None` while an overlay covers the list.
    #[must_use]
    pub fn hit_test(&self, row: usize) -> Option<HitTarget> {
        if self.overlay.is_some() {
            return None;
        }

        if row == self.layout.load_more_row {
            return Some(HitTarget::LoadMore);
        }

        row.checked_sub(self.layout.first_row)
            .and_then(|offset| self.display_items.get(offset))
            .map(|item| HitTarget::Preview(item.id.clone()))
    }
}

/// Something a mouse click can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// A preview row, by book id.
    Preview(String),
    /// The "Show more" control.
    LoadMore,
}

/// Display information for a single preview row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Book id the row is tagged with.
    pub id: String,

    /// Book title.
    pub title: String,

    /// Resolved author name.
    pub author: String,

    /// Cover image URI.
    pub image: String,

    /// Whether the list cursor is on this row.
    pub is_selected: bool,
}

/// "Show more" control display information.
#[derive(Debug, Clone)]
pub struct LoadMoreInfo {
    /// `"Show more (N)"` or `"No more books"`.
    pub label: String,

    /// Drawn dimmed and ignores activation when `true`.
    pub disabled: bool,

    /// Whether the list cursor is on the control.
    pub is_selected: bool,
}

/// Screen rows (1-indexed) of the list regions.
#[derive(Debug, Clone, Copy)]
pub struct ListLayout {
    /// Row of the first visible preview.
    pub first_row: usize,

    /// Row of the "Show more" control.
    pub load_more_row: usize,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the catalog label and match counts.
    pub title: String,

    /// Shortcut hints for the header actions.
    pub actions: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current input mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Overlay content, one variant per panel.
#[derive(Debug, Clone)]
pub enum OverlayView {
    Search(SearchView),
    Settings(SettingsView),
    Detail(DetailView),
}

/// Search form fields as currently filled in.
#[derive(Debug, Clone)]
pub struct SearchView {
    pub title: String,
    pub genre: String,
    pub author: String,
    pub focus: SearchField,
}

/// Settings form as currently filled in.
#[derive(Debug, Clone)]
pub struct SettingsView {
    /// Selected preset name (`day` or `night`).
    pub preset: String,
}

/// Detail panel content.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub title: String,
    /// `"{author} ({year})"`.
    pub subtitle: String,
    pub image: String,
    /// Description wrapped to the panel width.
    pub description_lines: Vec<String>,
}
