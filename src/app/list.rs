//! Paginated preview list and its "Show more" control.
//!
//! [`ListController`] owns the current matches (indices into the catalog, in
//! dataset order), the page number and the rendered previews. The rendered
//! list is always the prefix of the matches of length `page * page_size`,
//! clamped to the number of matches.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::list::ListController;
//! use bookcase::catalog;
//!
//! let catalog = catalog::builtin();
//! let mut list = ListController::new(&catalog, 4);
//! assert_eq!(list.previews().len(), 4);
//!
//! list.show_more(&catalog);
//! assert_eq!(list.page(), 2);
//! assert_eq!(list.previews().len(), 8);
//! ```

use super::preview::Preview;
use crate::domain::Catalog;

/// Books revealed per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Number of matches left unrendered after `page` pages.
#[must_use]
pub const fn remaining(total: usize, page: usize, page_size: usize) -> usize {
    total.saturating_sub(page.saturating_mul(page_size))
}

/// Label and enabled state of the "Show more" control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreButton {
    /// `"Show more (N)"` or `"No more books"`.
    pub label: String,
    /// Matches not yet rendered.
    pub remaining: usize,
    /// `true` exactly when nothing remains.
    pub disabled: bool,
}

impl LoadMoreButton {
    /// Computes the control state for `total` matches at `page`.
    #[must_use]
    pub fn compute(total: usize, page: usize, page_size: usize) -> Self {
        let remaining = remaining(total, page, page_size);
        let label = if remaining > 0 {
            format!("Show more ({remaining})")
        } else {
            "No more books".to_string()
        };

        Self {
            label,
            remaining,
            disabled: remaining == 0,
        }
    }
}

/// Current matches, page, rendered previews and load-more state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListController {
    matches: Vec<usize>,
    page: usize,
    page_size: usize,
    previews: Vec<Preview>,
    load_more: LoadMoreButton,
}

impl ListController {
    /// Starts on page 1 with every book of `catalog` as a match.
    ///
    /// A `page_size` of 0 is treated as 1.
    #[must_use]
    pub fn new(catalog: &Catalog, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let mut list = Self {
            matches: (0..catalog.len()).collect(),
            page: 1,
            page_size,
            previews: Vec::new(),
            load_more: LoadMoreButton::compute(0, 1, page_size),
        };
        list.render(catalog);
        list
    }

    /// Replaces the matches wholesale, resets to page 1 and re-renders.
    pub fn set_matches(&mut self, matches: Vec<usize>, catalog: &Catalog) {
        self.matches = matches;
        self.page = 1;
        self.render(catalog);
    }

    /// Reveals one more page. Returns `false` (and changes nothing) when the
    /// control is disabled.
    pub fn show_more(&mut self, catalog: &Catalog) -> bool {
        if self.load_more.disabled {
            tracing::debug!(page = self.page, "show more ignored, nothing remaining");
            return false;
        }

        self.page += 1;
        self.render(catalog);
        true
    }

    /// Clears the rendered previews and rebuilds them from the current
    /// matches and page, then recomputes the load-more control.
    pub fn render(&mut self, catalog: &Catalog) {
        let visible = self.page.saturating_mul(self.page_size).min(self.matches.len());

        self.previews.clear();
        self.previews.extend(
            self.matches[..visible]
                .iter()
                .filter_map(|&index| catalog.books().get(index))
                .map(|book| Preview::new(book, catalog)),
        );

        self.load_more = LoadMoreButton::compute(self.matches.len(), self.page, self.page_size);

        tracing::debug!(
            matches = self.matches.len(),
            page = self.page,
            rendered = self.previews.len(),
            remaining = self.load_more.remaining,
            "preview list rendered"
        );
    }

    /// Updates every rendered preview in place from `catalog`.
    ///
    /// Previews whose id no longer resolves are left as they are.
    pub fn refresh(&mut self, catalog: &Catalog) {
        for preview in &mut self.previews {
            if let Some(book) = catalog.find(&preview.id) {
                preview.update(book, catalog);
            }
        }
    }

    /// Catalog indices of the current matches, in dataset order.
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Current page, starting at 1.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Books revealed per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Rendered previews.
    #[must_use]
    pub fn previews(&self) -> &[Preview] {
        &self.previews
    }

    /// Current "Show more" control state.
    #[must_use]
    pub const fn load_more(&self) -> &LoadMoreButton {
        &self.load_more
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, NameMap};
    use chrono::{TimeZone, Utc};

    fn catalog_of(n: usize) -> Catalog {
        let books = (0..n)
            .map(|i| Book {
                id: format!("b{i}"),
                title: format!("Book {i}"),
                author: "a".to_string(),
                image: format!("img{i}"),
                description: String::new(),
                published: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
                genres: vec![],
            })
            .collect();
        let authors = NameMap::from([("a".to_string(), "Author".to_string())]);
        Catalog::new(books, authors, NameMap::new()).unwrap()
    }

    #[test]
    fn duplicate_ids_are_all_listed() {
        let mut books = catalog_of(2).books().to_vec();
        books[1].id = "b0".to_string();
        let authors = NameMap::from([("a".to_string(), "Author".to_string())]);
        let catalog = Catalog::new(books, authors, NameMap::new()).unwrap();
        let list = ListController::new(&catalog, 10);

        let titles: Vec<&str> = list.previews().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Book 0", "Book 1"]);
        assert_eq!(catalog.find("b0").map(|b| b.title.as_str()), Some("Book 0"));
    }

    #[test]
    fn five_books_page_size_two() {
        let catalog = catalog_of(5);
        let mut list = ListController::new(&catalog, 2);

        assert_eq!(list.previews().len(), 2);
        assert_eq!(list.load_more().label, "Show more (3)");
        assert!(!list.load_more().disabled);

        assert!(list.show_more(&catalog));
        assert!(list.show_more(&catalog));
        assert_eq!(list.page(), 3);
        assert_eq!(list.previews().len(), 5);
        assert_eq!(list.load_more().label, "No more books");
        assert!(list.load_more().disabled);
    }

    #[test]
    fn show_more_is_a_no_op_when_disabled() {
        let catalog = catalog_of(3);
        let mut list = ListController::new(&catalog, 5);

        assert!(!list.show_more(&catalog));
        assert_eq!(list.page(), 1);
        assert_eq!(list.previews().len(), 3);
    }

    #[test]
    fn first_page_renders_min_of_total_and_page_size() {
        for (total, size) in [(0, 3), (2, 3), (3, 3), (10, 3)] {
            let list = ListController::new(&catalog_of(total), size);
            assert_eq!(list.previews().len(), total.min(size), "total={total} size={size}");
        }
    }

    #[test]
    fn remaining_never_underflows() {
        assert_eq!(remaining(5, 1, 2), 3);
        assert_eq!(remaining(5, 3, 2), 0);
        assert_eq!(remaining(5, 100, 2), 0);
        assert_eq!(remaining(0, 1, 36), 0);
    }

    #[test]
    fn set_matches_resets_page_and_keeps_dataset_order() {
        let catalog = catalog_of(6);
        let mut list = ListController::new(&catalog, 2);
        list.show_more(&catalog);
        assert_eq!(list.page(), 2);

        list.set_matches(vec![1, 3, 5], &catalog);
        assert_eq!(list.page(), 1);
        let ids: Vec<&str> = list.previews().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b3"]);
        assert_eq!(list.load_more().label, "Show more (1)");
    }

    #[test]
    fn empty_matches_disable_the_control() {
        let catalog = catalog_of(4);
        let mut list = ListController::new(&catalog, 2);
        list.set_matches(vec![], &catalog);

        assert!(list.previews().is_empty());
        assert!(list.load_more().disabled);
        assert_eq!(list.load_more().label, "No more books");
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let list = ListController::new(&catalog_of(3), 0);
        assert_eq!(list.page_size(), 1);
        assert_eq!(list.previews().len(), 1);
    }
}
