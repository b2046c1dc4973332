//! Book domain model.
//!
//! A [`Book`] is one entry of the catalog. Books are immutable once loaded and
//! reference authors and genres by id; display names are resolved through the
//! owning [`Catalog`](super::Catalog).

use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: Identifier, expected to be unique within a catalog
/// - `title`: Display title
/// - `author`: Author id, a key of the catalog's author map
/// - `image`: Cover image URI
/// - `description`: Free-text blurb shown in the detail panel
/// - `published`: Publication timestamp (RFC 3339 in catalog files)
/// - `genres`: Genre ids, keys of the catalog's genre map
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Book {
    /// Returns the calendar year of publication.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcase::catalog;
    ///
    /// let catalog = catalog::builtin();
    /// let dune = catalog.find("dune").unwrap();
    /// assert_eq!(dune.year(), 1965);
    /// ```
    #[must_use]
    pub fn year(&self) -> i32 {
        self.published.year()
    }

    /// Returns `true` if the book is tagged with the given genre id.
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn book(genres: &[&str]) -> Book {
        Book {
            id: "b1".to_string(),
            title: "Dune".to_string(),
            author: "herbert".to_string(),
            image: "https://example.com/dune.jpg".to_string(),
            description: "Desert planet.".to_string(),
            published: Utc.with_ymd_and_hms(1965, 8, 1, 0, 0, 0).unwrap(),
            genres: genres.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn year_comes_from_the_publication_timestamp() {
        assert_eq!(book(&[]).year(), 1965);
    }

    #[test]
    fn has_genre_checks_membership() {
        let b = book(&["scifi", "classic"]);
        assert!(b.has_genre("classic"));
        assert!(!b.has_genre("fantasy"));
    }

    #[test]
    fn deserializes_rfc3339_timestamps() {
        let json = r#"{
            "id": "b1", "title": "Dune", "author": "herbert",
            "image": "https://example.com/dune.jpg", "description": "",
            "published": "1965-08-01T00:00:00.000Z", "genres": ["scifi"]
        }"#;
        let parsed: Book = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.year(), 1965);
        assert_eq!(parsed.genres, vec!["scifi".to_string()]);
    }
}
