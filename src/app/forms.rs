//! Search and settings form state.
//!
//! Form contents survive closing and reopening their overlay; only a submit
//! acts on them. Dropdowns are [`SelectField`]s whose first option is the
//! "All …" entry mapping to [`Selector::Any`].

use super::filter::{Filters, Selector};
use super::modes::SearchField;
use crate::domain::{Catalog, NameMap};
use crate::ui::theme::ThemePreset;

/// A dropdown: labelled options plus the selected position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    options: Vec<(Selector, String)>,
    selected: usize,
}

impl SelectField {
    /// Builds a dropdown with an "any" entry labelled `any_label` followed by
    /// one option per `names` entry.
    #[must_use]
    pub fn new(any_label: &str, names: &NameMap) -> Self {
        let options = std::iter::once((Selector::Any, any_label.to_string()))
            .chain(
                names
                    .iter()
                    .map(|(id, name)| (Selector::Id(id.clone()), name.clone())),
            )
            .collect();

        Self {
            options,
            selected: 0,
        }
    }

    /// Moves the selection by `delta` positions, wrapping at both ends.
    pub fn cycle(&mut self, delta: isize) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        let offset = delta.rem_euclid(len as isize) as usize;
        self.selected = (self.selected + offset) % len;
    }

    /// Selects the option with value `selector`; returns `false` if absent.
    pub fn select(&mut self, selector: &Selector) -> bool {
        match self.options.iter().position(|(value, _)| value == selector) {
            Some(position) => {
                self.selected = position;
                true
            }
            None => false,
        }
    }

    /// Value of the selected option.
    #[must_use]
    pub fn value(&self) -> Selector {
        self.options
            .get(self.selected)
            .map_or(Selector::Any, |(value, _)| value.clone())
    }

    /// Label of the selected option.
    #[must_use]
    pub fn label(&self) -> &str {
        self.options
            .get(self.selected)
            .map_or("", |(_, label)| label.as_str())
    }
}

/// The search overlay's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    pub genre: SelectField,
    pub author: SelectField,
    pub focus: SearchField,
}

impl SearchForm {
    /// Builds an empty form with dropdowns listing every genre and author.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            title: String::new(),
            genre: SelectField::new("All Genres", catalog.genres()),
            author: SelectField::new("All Authors", catalog.authors()),
            focus: SearchField::Title,
        }
    }

    /// Builds the form over a reloaded `catalog`, keeping the typed title, the
    /// focus and any dropdown selection the new catalog still lists.
    #[must_use]
    pub fn rebuilt_for(&self, catalog: &Catalog) -> Self {
        let mut form = Self::new(catalog);
        form.title.clone_from(&self.title);
        form.focus = self.focus;
        form.genre.select(&self.genre.value());
        form.author.select(&self.author.value());
        form
    }

    /// Gathers the current field values.
    #[must_use]
    pub fn filters(&self) -> Filters {
        Filters {
            title: self.title.clone(),
            author: self.author.value(),
            genre: self.genre.value(),
        }
    }

    /// Types a character into the title input, if it has focus.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.focus != SearchField::Title {
            return false;
        }
        self.title.push(c);
        true
    }

    /// Deletes the last character of the title input, if it has focus.
    pub fn pop_char(&mut self) -> bool {
        if self.focus != SearchField::Title {
            return false;
        }
        self.title.pop().is_some()
    }

    /// Cycles the focused dropdown. Returns `false` when the title input has
    /// focus.
    pub fn cycle_focused(&mut self, delta: isize) -> bool {
        match self.focus {
            SearchField::Title => false,
            SearchField::Genre => {
                self.genre.cycle(delta);
                true
            }
            SearchField::Author => {
                self.author.cycle(delta);
                true
            }
        }
    }
}

/// The settings overlay's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsForm {
    pub preset: ThemePreset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn dropdowns_start_on_any() {
        let form = SearchForm::new(&catalog::builtin());
        assert_eq!(form.genre.label(), "All Genres");
        assert_eq!(form.author.label(), "All Authors");
        assert_eq!(form.filters(), Filters::default());
    }

    #[test]
    fn cycle_wraps_both_ways() {
        let names = NameMap::from([
            ("a".to_string(), "Alpha".to_string()),
            ("b".to_string(), "Beta".to_string()),
        ]);
        let mut field = SelectField::new("Any", &names);

        field.cycle(-1);
        assert_eq!(field.label(), "Beta");
        field.cycle(1);
        assert_eq!(field.label(), "Any");
        field.cycle(4);
        assert_eq!(field.label(), "Alpha");
    }

    #[test]
    fn select_by_value() {
        let mut form = SearchForm::new(&catalog::builtin());
        assert!(form.author.select(&Selector::Id("christie".to_string())));
        assert_eq!(form.author.label(), "Agatha Christie");
        assert!(!form.author.select(&Selector::Id("nobody".to_string())));
        assert_eq!(form.author.label(), "Agatha Christie");
    }

    #[test]
    fn rebuild_keeps_entries_the_new_catalog_still_lists() {
        let catalog = catalog::builtin();
        let mut form = SearchForm::new(&catalog);
        form.title = "the".to_string();
        form.focus = SearchField::Author;
        form.author.select(&Selector::Id("christie".to_string()));
        form.genre.select(&Selector::Id("mystery".to_string()));

        let mut genres = catalog.genres().clone();
        genres.shift_remove("mystery");
        let reloaded = Catalog::new(catalog.books().to_vec(), catalog.authors().clone(), genres)
            .unwrap();
        let rebuilt = form.rebuilt_for(&reloaded);

        assert_eq!(rebuilt.title, "the");
        assert_eq!(rebuilt.focus, SearchField::Author);
        assert_eq!(rebuilt.author.label(), "Agatha Christie");
        assert_eq!(rebuilt.genre.value(), Selector::Any);
    }

    #[test]
    fn typing_only_reaches_the_title_input() {
        let mut form = SearchForm::new(&catalog::builtin());
        assert!(form.push_char('d'));
        form.focus = SearchField::Genre;
        assert!(!form.push_char('x'));
        assert!(!form.pop_char());
        assert!(form.cycle_focused(1));
        assert_eq!(form.title, "d");
        assert_ne!(form.genre.value(), Selector::Any);
    }
}
