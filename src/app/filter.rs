//! Title, author and genre filtering over the full catalog.
//!
//! A book matches [`Filters`] when all three hold:
//!
//! 1. the title filter is blank, or the lowercased title contains the
//!    lowercased filter text
//! 2. the author selector is `Any` or equals the book's author id
//! 3. the genre selector is `Any` or is one of the book's genre ids
//!
//! Filtering is a linear scan; results keep dataset order.

use crate::domain::{Book, Catalog, NameMap};
use std::str::FromStr;

/// Value of an author or genre dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// The "All Authors" / "All Genres" option.
    #[default]
    Any,
    /// A specific author or genre id.
    Id(String),
}

impl Selector {
    /// Returns `true` if the selector accepts `value`.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Id(id) => id == value,
        }
    }

    /// Keeps an id listed in `names`. An id missing from `names` becomes `Any`.
    #[must_use]
    pub fn known_in(self, names: &NameMap) -> Self {
        match self {
            Self::Id(id) if !names.contains_key(&id) => Self::Any,
            other => other,
        }
    }
}

impl FromStr for Selector {
    type Err = std::convert::Infallible;

    /// `"any"` maps to [`Selector::Any`], anything else is an id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "any" {
            Self::Any
        } else {
            Self::Id(s.to_string())
        })
    }
}

/// The three search-form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub title: String,
    pub author: Selector,
    pub genre: Selector,
}

impl Filters {
    /// Returns `true` if `book` satisfies all three predicates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bookcase::app::filter::Filters;
    /// use bookcase::catalog;
    ///
    /// let catalog = catalog::builtin();
    /// let filters = Filters { title: "dune".to_string(), ..Filters::default() };
    /// assert!(filters.matches(catalog.find("dune").unwrap()));
    /// assert!(!filters.matches(catalog.find("foundation").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        self.title_matches(&book.title)
            && self.author.accepts(&book.author)
            && match &self.genre {
                Selector::Any => true,
                Selector::Id(genre) => book.has_genre(genre),
            }
    }

    /// Catalog indices of every matching book, in dataset order.
    #[must_use]
    pub fn apply(&self, catalog: &Catalog) -> Vec<usize> {
        let _span = tracing::debug_span!(
            "apply_filters",
            total_books = catalog.len(),
            title_len = self.title.len(),
            author = ?self.author,
            genre = ?self.genre
        )
        .entered();

        let matches: Vec<usize> = catalog
            .books()
            .iter()
            .enumerate()
            .filter(|(_, book)| self.matches(book))
            .map(|(index, _)| index)
            .collect();

        tracing::debug!(match_count = matches.len(), "filters applied");
        matches
    }

    /// Blank means empty after trimming; the containment test itself uses the
    /// untrimmed text.
    fn title_matches(&self, title: &str) -> bool {
        self.title.trim().is_empty() || title.to_lowercase().contains(&self.title.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn filters(title: &str, author: &str, genre: &str) -> Filters {
        Filters {
            title: title.to_string(),
            author: author.parse().unwrap(),
            genre: genre.parse().unwrap(),
        }
    }

    fn ids(catalog: &Catalog, matches: &[usize]) -> Vec<String> {
        matches
            .iter()
            .map(|&i| catalog.books()[i].id.clone())
            .collect()
    }

    #[test]
    fn empty_filters_match_everything_in_order() {
        let catalog = catalog::builtin();
        let matches = Filters::default().apply(&catalog);
        assert_eq!(matches, (0..catalog.len()).collect::<Vec<_>>());
    }

    #[test]
    fn title_is_case_insensitive_substring() {
        let catalog = catalog::builtin();
        let matches = filters("DUNE", "any", "any").apply(&catalog);
        assert_eq!(ids(&catalog, &matches), vec!["dune"]);

        let matches = filters("the", "any", "any").apply(&catalog);
        let found = ids(&catalog, &matches);
        assert!(found.contains(&"the-hobbit".to_string()));
        assert!(found.contains(&"and-then-there-were-none".to_string()));
        assert!(!found.contains(&"dune".to_string()));
    }

    #[test]
    fn whitespace_only_title_counts_as_blank() {
        let catalog = catalog::builtin();
        assert_eq!(filters("   ", "any", "any").apply(&catalog).len(), catalog.len());
    }

    #[test]
    fn title_text_is_not_trimmed_for_matching() {
        let catalog = catalog::builtin();
        assert!(filters(" dune", "any", "any").apply(&catalog).is_empty());
    }

    #[test]
    fn author_and_genre_combine() {
        let catalog = catalog::builtin();
        let matches = filters("", "asimov", "any").apply(&catalog);
        assert_eq!(ids(&catalog, &matches), vec!["foundation", "i-robot"]);

        let matches = filters("", "asimov", "classic").apply(&catalog);
        assert_eq!(ids(&catalog, &matches), vec!["foundation"]);

        let matches = filters("", "any", "mystery").apply(&catalog);
        assert_eq!(
            ids(&catalog, &matches),
            vec!["orient-express", "and-then-there-were-none"]
        );
    }

    #[test]
    fn partition_is_exact() {
        let catalog = catalog::builtin();
        let combos = [
            filters("a", "any", "classic"),
            filters("", "pratchett", "comedy"),
            filters("o", "le-guin", "any"),
            filters("zzz", "any", "any"),
            filters("", "austen", "scifi"),
        ];

        for f in combos {
            let matches = f.apply(&catalog);
            for (index, book) in catalog.books().iter().enumerate() {
                let title_ok = f.title.trim().is_empty()
                    || book.title.to_lowercase().contains(&f.title.to_lowercase());
                let author_ok = f.author == Selector::Any || f.author == Selector::Id(book.author.clone());
                let genre_ok = match &f.genre {
                    Selector::Any => true,
                    Selector::Id(g) => book.genres.contains(g),
                };
                assert_eq!(
                    matches.contains(&index),
                    title_ok && author_ok && genre_ok,
                    "book {} under {f:?}",
                    book.id
                );
            }
            assert!(matches.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn selector_parses_any() {
        assert_eq!("any".parse::<Selector>().unwrap(), Selector::Any);
        assert_eq!("scifi".parse::<Selector>().unwrap(), Selector::Id("scifi".to_string()));
    }
}
