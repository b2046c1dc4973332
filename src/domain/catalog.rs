//! The read-only book dataset.
//!
//! A [`Catalog`] bundles the book list with the author and genre name maps. It is
//! validated once on construction and never mutated afterwards; the application
//! state only ever holds indices into it.

use super::book::Book;
use super::error::{BookcaseError, Result};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Id → display name, in the order the catalog file lists them.
pub type NameMap = IndexMap<String, String>;

/// Books plus the id → display name maps they reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    books: Vec<Book>,
    authors: NameMap,
    genres: NameMap,
}

impl Catalog {
    /// Builds a catalog, checking that every book references a known author.
    ///
    /// Unknown genre ids and duplicate book ids are accepted but logged: the
    /// first book with a given id is the one detail lookups resolve to.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::Catalog`] if a book's author id is missing from
    /// the author map.
    pub fn new(
        books: Vec<Book>,
        authors: NameMap,
        genres: NameMap,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(books.len());

        for book in &books {
            if !authors.contains_key(&book.author) {
                return Err(BookcaseError::Catalog(format!(
                    "book '{}' references unknown author '{}'",
                    book.id, book.author
                )));
            }

            if !seen.insert(book.id.as_str()) {
                tracing::warn!(book_id = %book.id, "duplicate book id, clicks resolve to the first book with this id");
            }

            for genre in book.genres.iter().filter(|g| !genres.contains_key(*g)) {
                tracing::warn!(book_id = %book.id, genre = %genre, "book references unknown genre");
            }
        }

        tracing::debug!(
            book_count = books.len(),
            author_count = authors.len(),
            genre_count = genres.len(),
            "catalog built"
        );

        Ok(Self {
            books,
            authors,
            genres,
        })
    }

    /// All books in dataset order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Author id → display name, in file order.
    #[must_use]
    pub const fn authors(&self) -> &NameMap {
        &self.authors
    }

    /// Genre id → display name, in file order.
    #[must_use]
    pub const fn genres(&self) -> &NameMap {
        &self.genres
    }

    /// Resolves an author id to its display name, or `""` if unknown.
    #[must_use]
    pub fn author_name(&self, author: &str) -> &str {
        self.authors.get(author).map_or("", String::as_str)
    }

    /// Finds a book by id with a linear scan over the full dataset.
    ///
    /// Returns the first match, so duplicate ids resolve to the earliest entry.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Number of books in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if the dataset has no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
