//! Modal panels: search, settings and book detail.
//!
//! The three panels are independent open/closed flags. Only the detail panel
//! carries content of its own, populated from the selected book when opened.

use crate::domain::{Book, Catalog};

/// One of the three modal panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Search,
    Settings,
    Detail,
}

/// Open/closed state of every overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    search: bool,
    settings: bool,
    detail: bool,
}

impl Overlays {
    /// Opens `overlay`. Other overlays are unaffected.
    pub fn open(&mut self, overlay: Overlay) {
        tracing::debug!(overlay = ?overlay, "overlay opened");
        *self.flag(overlay) = true;
    }

    /// Closes `overlay`. Other overlays are unaffected.
    pub fn close(&mut self, overlay: Overlay) {
        tracing::debug!(overlay = ?overlay, "overlay closed");
        *self.flag(overlay) = false;
    }

    /// The overlay drawn on top and receiving input, if any.
    ///
    /// Detail sits above settings, which sits above search.
    #[must_use]
    pub const fn topmost(&self) -> Option<Overlay> {
        if self.detail {
            Some(Overlay::Detail)
        } else if self.settings {
            Some(Overlay::Settings)
        } else if self.search {
            Some(Overlay::Search)
        } else {
            None
        }
    }

    fn flag(&mut self, overlay: Overlay) -> &mut bool {
        match overlay {
            Overlay::Search => &mut self.search,
            Overlay::Settings => &mut self.settings,
            Overlay::Detail => &mut self.detail,
        }
    }
}

/// Content of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    /// Id of the book shown.
    pub book_id: String,
    /// Cover image URI.
    pub image: String,
    /// Book title.
    pub title: String,
    /// `"{author} ({year})"`.
    pub subtitle: String,
    /// Book description.
    pub description: String,
}

impl DetailPanel {
    /// Populates the panel from `book`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bookcase::app::overlay::DetailPanel;
    /// use bookcase::catalog;
    ///
    /// let catalog = catalog::builtin();
    /// let panel = DetailPanel::from_book(catalog.find("the-hobbit").unwrap(), &catalog);
    /// assert_eq!(panel.subtitle, "J. R. R. Tolkien (1937)");
    /// ```
    #[must_use]
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            book_id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", catalog.author_name(&book.author), book.year()),
            description: book.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn overlays_are_independent() {
        let mut overlays = Overlays::default();
        overlays.open(Overlay::Search);
        overlays.open(Overlay::Detail);
        assert_eq!(overlays.topmost(), Some(Overlay::Detail));

        overlays.close(Overlay::Detail);
        assert_eq!(overlays.topmost(), Some(Overlay::Search));

        overlays.close(Overlay::Search);
        assert_eq!(overlays.topmost(), None);
    }

    #[test]
    fn closing_a_closed_overlay_is_harmless() {
        let mut overlays = Overlays::default();
        overlays.close(Overlay::Settings);
        assert_eq!(overlays, Overlays::default());
    }

    #[test]
    fn detail_panel_copies_book_fields() {
        let catalog = catalog::builtin();
        let book = catalog.find("pride-and-prejudice").unwrap();
        let panel = DetailPanel::from_book(book, &catalog);

        assert_eq!(panel.book_id, "pride-and-prejudice");
        assert_eq!(panel.title, "Pride and Prejudice");
        assert_eq!(panel.subtitle, "Jane Austen (1813)");
        assert_eq!(panel.description, book.description);
        assert_eq!(panel.image, book.image);
    }
}
