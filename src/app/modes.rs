//! Input mode types for the application.
//!
//! The input mode decides how keys are interpreted. It is not stored: it is
//! derived from which overlay is on top (see [`AppState::input_mode`]).
//!
//! - **Browse**: no overlay open; keys move the list cursor and open overlays
//! - **Search**: search form on top; focus is one of its [`SearchField`]s
//! - **Settings**: settings form on top
//! - **Detail**: detail panel on top
//!
//! [`AppState::input_mode`]: super::AppState::input_mode

/// Focusable fields of the search form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    /// Free-text title input.
    #[default]
    Title,
    /// Genre dropdown.
    Genre,
    /// Author dropdown.
    Author,
}

impl SearchField {
    /// Next field in Tab order, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Genre => Self::Author,
            Self::Author => Self::Title,
        }
    }

    /// Previous field in Tab order, wrapping.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Genre => Self::Title,
            Self::Author => Self::Genre,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating the preview list.
    Browse,
    /// Editing the search form, with the focused field.
    Search(SearchField),
    /// Choosing a theme preset.
    Settings,
    /// Reading a book's detail panel.
    Detail,
}
