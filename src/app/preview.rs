//! Book preview entries.
//!
//! A [`Preview`] is the list-entry form of a book: what one row of the list
//! shows and what a click on that row resolves through (its `id`).

use crate::domain::{Book, Catalog};

/// Clickable list entry for one book, tagged with the book's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Id of the book this entry represents.
    pub id: String,
    /// Cover image URI.
    pub image: String,
    /// Book title.
    pub title: String,
    /// Resolved author display name.
    pub author: String,
}

impl Preview {
    /// Builds a preview for `book`, resolving its author through `catalog`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bookcase::app::preview::Preview;
    /// use bookcase::catalog;
    ///
    /// let catalog = catalog::builtin();
    /// let dune = catalog.find("dune").unwrap();
    /// let preview = Preview::new(dune, &catalog);
    /// assert_eq!(preview.author, "Frank Herbert");
    /// ```
    #[must_use]
    pub fn new(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            author: catalog.author_name(&book.author).to_string(),
        }
    }

    /// Refreshes image, title and author in place from `book`.
    ///
    /// The id is left alone; callers pass the book the preview already
    /// represents.
    pub fn update(&mut self, book: &Book, catalog: &Catalog) {
        self.image.clone_from(&book.image);
        self.title.clone_from(&book.title);
        catalog
            .author_name(&book.author)
            .clone_into(&mut self.author);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn new_resolves_author_name() {
        let catalog = catalog::builtin();
        let book = catalog.find("kindred").unwrap();
        let preview = Preview::new(book, &catalog);

        assert_eq!(preview.id, "kindred");
        assert_eq!(preview.title, "Kindred");
        assert_eq!(preview.author, "Octavia E. Butler");
        assert_eq!(preview.image, book.image);
    }

    #[test]
    fn update_rewrites_fields_in_place() {
        let catalog = catalog::builtin();
        let mut preview = Preview::new(catalog.find("dune").unwrap(), &catalog);

        let mut revised = catalog.find("dune").unwrap().clone();
        revised.title = "Dune (50th Anniversary)".to_string();
        revised.image = "https://example.com/dune-50.jpg".to_string();
        revised.author = "asimov".to_string();
        preview.update(&revised, &catalog);

        assert_eq!(preview.id, "dune");
        assert_eq!(preview.title, "Dune (50th Anniversary)");
        assert_eq!(preview.image, "https://example.com/dune-50.jpg");
        assert_eq!(preview.author, "Isaac Asimov");
    }
}
