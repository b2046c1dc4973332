//! JSON catalog file format.
//!
//! # File Format
//!
//! ```json
//! {
//!   "authors": { "herbert": "Frank Herbert" },
//!   "genres": { "scifi": "Science Fiction" },
//!   "books": [
//!     {
//!       "id": "dune",
//!       "title": "Dune",
//!       "author": "herbert",
//!       "image": "https://covers.openlibrary.org/b/id/11481354-L.jpg",
//!       "description": "...",
//!       "published": "1965-08-01T00:00:00.000Z",
//!       "genres": ["scifi"]
//!     }
//!   ]
//! }
//! ```

use crate::domain::error::Result;
use crate::domain::{Book, Catalog, NameMap};
use serde::Deserialize;
use std::path::Path;

/// Top-level structure of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    authors: NameMap,

    #[serde(default)]
    genres: NameMap,

    books: Vec<Book>,
}

/// Parses catalog JSON text into a validated catalog.
///
/// # Errors
///
/// Returns [`BookcaseError::Json`](crate::domain::BookcaseError::Json) for
/// malformed JSON or timestamps, and
/// [`BookcaseError::Catalog`](crate::domain::BookcaseError::Catalog) when a book
/// references an unknown author.
///
/// # Examples
///
/// ```
/// use bookcase::catalog::parse_catalog;
///
/// let catalog = parse_catalog(r#"{
///     "authors": {"a1": "Ann Author"},
///     "books": [{
///         "id": "b1", "title": "First", "author": "a1", "image": "",
///         "description": "", "published": "2020-01-01T00:00:00Z"
///     }]
/// }"#)?;
/// assert_eq!(catalog.len(), 1);
/// # Ok::<(), bookcase::BookcaseError>(())
/// ```
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(contents)?;

    tracing::debug!(
        books = file.books.len(),
        authors = file.authors.len(),
        genres = file.genres.len(),
        "parsed catalog JSON"
    );

    Catalog::new(file.books, file.authors, file.genres)
}

/// Reads and parses a catalog file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, otherwise the errors of
/// [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    tracing::debug!(path = ?path, "loading catalog file");
    let contents = std::fs::read_to_string(path)?;
    parse_catalog(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookcaseError;
    use std::io::Write;

    const SMALL: &str = r#"{
        "authors": {"a1": "Ann Author", "a2": "Bo Writer"},
        "genres": {"g1": "Fiction"},
        "books": [
            {"id": "b1", "title": "First", "author": "a1", "image": "img1",
             "description": "one", "published": "2020-05-01T10:00:00.000Z", "genres": ["g1"]},
            {"id": "b2", "title": "Second", "author": "a2", "image": "img2",
             "description": "two", "published": "1999-01-01T00:00:00Z"}
        ]
    }"#;

    #[test]
    fn parses_books_in_file_order() {
        let catalog = parse_catalog(SMALL).unwrap();
        let ids: Vec<&str> = catalog.books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
        assert!(catalog.books()[1].genres.is_empty());
        assert_eq!(catalog.author_name("a2"), "Bo Writer");
    }

    #[test]
    fn name_maps_keep_file_order() {
        let text = SMALL.replace(
            r#""authors": {"a1": "Ann Author", "a2": "Bo Writer"}"#,
            r#""authors": {"a2": "Bo Writer", "a1": "Ann Author"}"#,
        );
        let catalog = parse_catalog(&text).unwrap();
        let ids: Vec<&str> = catalog.authors().keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["a2", "a1"]);

        let mut dropdown = crate::app::forms::SearchForm::new(&catalog).author;
        dropdown.cycle(1);
        assert_eq!(dropdown.label(), "Bo Writer");
    }

    #[test]
    fn bad_timestamp_is_a_json_error() {
        let text = SMALL.replace("1999-01-01T00:00:00Z", "last tuesday");
        assert!(matches!(parse_catalog(&text), Err(BookcaseError::Json(_))));
    }

    #[test]
    fn unknown_author_is_a_catalog_error() {
        let text = SMALL.replace("\"author\": \"a2\"", "\"author\": \"a9\"");
        assert!(matches!(parse_catalog(&text), Err(BookcaseError::Catalog(_))));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(BookcaseError::Io(_))));
    }

    #[test]
    fn builtin_catalog_parses() {
        let catalog = crate::catalog::builtin();
        assert!(catalog.len() >= 10);
        assert!(catalog.find("foundation").is_some());
    }
}
