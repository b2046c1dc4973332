//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of all view state: the
//! loaded catalog, the list controller (matches, page, rendered previews), the
//! list cursor, the overlays and their forms, and the active theme.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot into a
//! [`UIViewModel`], windowing the rendered previews to the pane height and
//! laying out whichever overlay is on top. The same view model answers mouse
//! hit-tests, so a click maps to exactly what was drawn.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::AppState;
//! use bookcase::catalog;
//! use bookcase::ui::Theme;
//!
//! let state = AppState::new(catalog::builtin(), "built-in", Theme::default(), 36);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.overlay.is_none());
//! ```

use super::filter::Filters;
use super::forms::{SearchForm, SettingsForm};
use super::list::ListController;
use super::modes::InputMode;
use super::overlay::{DetailPanel, Overlay, Overlays};
use crate::domain::Catalog;
use crate::ui::helpers::wrap_text;
use crate::ui::theme::{Palette, Theme, ThemePreset};
use crate::ui::viewmodel::{
    DetailView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ListLayout, LoadMoreInfo,
    OverlayView, SearchView, SettingsView, UIViewModel,
};
use std::path::PathBuf;

/// Screen row (1-indexed) of the first preview row.
pub const LIST_FIRST_ROW: usize = 5;

/// Rows taken by chrome: blank, header, border, column headers, load-more
/// button, border, footer, trailing blank.
const CHROME_ROWS: usize = 8;

/// Horizontal margin around overlay boxes.
const OVERLAY_MARGIN: usize = 4;

/// What the list cursor is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorTarget {
    /// A rendered preview, by book id.
    Preview(String),
    /// The "Show more" control below the last preview.
    LoadMore,
}

/// External files to load once Zellij grants filesystem access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    /// Sandbox path of a JSON catalog file.
    pub catalog_file: Option<PathBuf>,
    /// Sandbox path of a TOML palette file.
    pub palette_file: Option<PathBuf>,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded dataset. Read-only until replaced wholesale.
    pub catalog: Catalog,

    /// Where the catalog came from, shown in the header.
    pub catalog_label: String,

    /// Matches, page and rendered previews.
    pub list: ListController,

    /// Position in `0..=previews.len()`; the last position is the
    /// "Show more" control.
    pub cursor: usize,

    /// Open/closed state of the three overlays.
    pub overlays: Overlays,

    /// Search form contents.
    pub search_form: SearchForm,

    /// Filters behind the current matches, as last submitted.
    pub filters: Filters,

    /// Settings form contents.
    pub settings_form: SettingsForm,

    /// Detail panel content, present once a book has been opened.
    pub detail: Option<DetailPanel>,

    /// Active colors.
    pub theme: Theme,

    /// Files requested by the configuration.
    pub sources: Sources,
}

impl AppState {
    /// Creates a state showing page 1 of the whole catalog.
    #[must_use]
    pub fn new(catalog: Catalog, catalog_label: &str, theme: Theme, page_size: usize) -> Self {
        let list = ListController::new(&catalog, page_size);
        let search_form = SearchForm::new(&catalog);
        let settings_form = SettingsForm {
            preset: theme.preset(),
        };

        Self {
            catalog,
            catalog_label: catalog_label.to_string(),
            list,
            cursor: 0,
            overlays: Overlays::default(),
            search_form,
            filters: Filters::default(),
            settings_form,
            detail: None,
            theme,
            sources: Sources::default(),
        }
    }

    /// Derives the input mode from the topmost overlay.
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        match self.overlays.topmost() {
            None => InputMode::Browse,
            Some(Overlay::Search) => InputMode::Search(self.search_form.focus),
            Some(Overlay::Settings) => InputMode::Settings,
            Some(Overlay::Detail) => InputMode::Detail,
        }
    }

    /// Moves the cursor down one position, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        let positions = self.list.previews().len() + 1;
        self.cursor = (self.cursor + 1) % positions;
    }

    /// Moves the cursor up one position, wrapping to the "Show more" control.
    pub fn move_cursor_up(&mut self) {
        if self.cursor == 0 {
            self.cursor = self.list.previews().len();
        } else {
            self.cursor -= 1;
        }
    }

    /// What the cursor currently points at.
    #[must_use]
    pub fn cursor_target(&self) -> CursorTarget {
        self.list
            .previews()
            .get(self.cursor)
            .map_or(CursorTarget::LoadMore, |preview| {
                CursorTarget::Preview(preview.id.clone())
            })
    }

    /// Runs the filters over the full catalog, resets to page 1 and moves the
    /// cursor back to the top.
    pub fn apply_filters(&mut self, filters: &Filters) {
        let matches = filters.apply(&self.catalog);
        self.list.set_matches(matches, &self.catalog);
        self.filters = filters.clone();
        self.cursor = 0;
    }

    /// Reveals the next page. Returns `false` if nothing remained.
    pub fn show_more(&mut self) -> bool {
        self.list.show_more(&self.catalog)
    }

    /// Opens the detail panel for the book with `id`.
    ///
    /// Resolves over the full catalog, first match wins. Returns `false` and
    /// leaves everything untouched if no book has that id.
    pub fn open_detail(&mut self, id: &str) -> bool {
        let Some(book) = self.catalog.find(id) else {
            tracing::debug!(book_id = %id, "clicked preview has no matching book");
            return false;
        };

        self.detail = Some(DetailPanel::from_book(book, &self.catalog));
        self.overlays.open(Overlay::Detail);
        true
    }

    /// Replaces the palette, keeping the active preset.
    pub fn replace_palette(&mut self, palette: Palette) {
        tracing::debug!(
            palette = %palette.name,
            dark = %palette.colors.dark,
            light = %palette.colors.light,
            "replacing palette"
        );
        let preset = self.theme.preset();
        self.theme = Theme::new(palette, preset);
    }

    /// Applies a theme preset.
    pub fn apply_preset(&mut self, preset: ThemePreset) {
        self.theme.set_preset(preset);
        self.settings_form.preset = preset;
    }

    /// Swaps in a newly loaded catalog.
    ///
    /// If the new catalog lists the same book ids in the same order, the
    /// search form is rebuilt over the new author and genre names and the
    /// submitted filters are run again. When they still select the same books,
    /// page and cursor are kept and rendered previews are refreshed in place;
    /// otherwise the list goes back to page 1 with the new matches.
    ///
    /// A catalog with different books starts over: all books match, page 1,
    /// fresh search form, detail panel closed.
    pub fn replace_catalog(&mut self, catalog: Catalog, label: &str) {
        let same_books = self.catalog.len() == catalog.len()
            && self
                .catalog
                .books()
                .iter()
                .zip(catalog.books())
                .all(|(old, new)| old.id == new.id);

        tracing::debug!(
            books = catalog.len(),
            same_books = same_books,
            label = %label,
            "replacing catalog"
        );

        self.catalog = catalog;
        label.clone_into(&mut self.catalog_label);

        if same_books {
            self.search_form = self.search_form.rebuilt_for(&self.catalog);
            self.filters.author = std::mem::take(&mut self.filters.author)
                .known_in(self.catalog.authors());
            self.filters.genre = std::mem::take(&mut self.filters.genre)
                .known_in(self.catalog.genres());

            let matches = self.filters.apply(&self.catalog);
            if matches == self.list.matches() {
                self.list.refresh(&self.catalog);
            } else {
                tracing::debug!(matches = matches.len(), "reloaded catalog changed the matches");
                self.list.set_matches(matches, &self.catalog);
                self.cursor = 0;
            }
            if let Some(detail) = &self.detail {
                self.detail = self
                    .catalog
                    .find(&detail.book_id)
                    .map(|book| DetailPanel::from_book(book, &self.catalog));
            }
            return;
        }

        self.list = ListController::new(&self.catalog, self.list.page_size());
        self.search_form = SearchForm::new(&self.catalog);
        self.filters = Filters::default();
        self.cursor = 0;
        self.detail = None;
        self.overlays.close(Overlay::Detail);
    }

    /// Computes a renderable UI view model for a pane of `rows` x `cols`.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Available list rows = `rows` minus chrome
    /// 2. Center the window on the cursor (clamped to the last preview when the
    ///    cursor is on the "Show more" control)
    /// 3. Shift the window back if it would end short of the last preview
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let previews = self.list.previews();
        let available_rows = rows.saturating_sub(CHROME_ROWS);
        let load_more = self.list.load_more();

        let anchor = self.cursor.min(previews.len().saturating_sub(1));
        let mut visible_start = anchor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(previews.len());
        if visible_end - visible_start < available_rows && previews.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = previews[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, preview)| DisplayItem {
                id: preview.id.clone(),
                title: preview.title.clone(),
                author: preview.author.clone(),
                image: preview.image.clone(),
                is_selected: visible_start + offset == self.cursor,
            })
            .collect();

        let empty_state = self.list.matches().is_empty().then(|| EmptyState {
            message: "No results found.".to_string(),
            subtitle: "Your filters might be too narrow.".to_string(),
        });

        UIViewModel {
            header: self.compute_header(),
            display_items,
            load_more: LoadMoreInfo {
                label: load_more.label.clone(),
                disabled: load_more.disabled,
                is_selected: self.cursor >= previews.len(),
            },
            empty_state,
            overlay: self.compute_overlay(rows, cols),
            footer: self.compute_footer(),
            layout: ListLayout {
                first_row: LIST_FIRST_ROW,
                load_more_row: rows.saturating_sub(3),
            },
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " Bookcase · {} ({}/{}) ",
                self.catalog_label,
                self.list.matches().len(),
                self.catalog.len()
            ),
            actions: "/ search   s settings".to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode() {
            InputMode::Browse => {
                "j/k: navigate  Enter: open  m: show more  /: search  s: settings  q: quit"
            }
            InputMode::Search(_) => "Tab: next field  ←/→: change option  Enter: search  Esc: cancel",
            InputMode::Settings => "←/→: change theme  Enter: save  Esc: cancel",
            InputMode::Detail => "Esc/Enter: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_overlay(&self, rows: usize, cols: usize) -> Option<OverlayView> {
        let inner_width = cols.saturating_sub(OVERLAY_MARGIN * 2 + 4);

        match self.overlays.topmost()? {
            Overlay::Search => Some(OverlayView::Search(SearchView {
                title: self.search_form.title.clone(),
                genre: self.search_form.genre.label().to_string(),
                author: self.search_form.author.label().to_string(),
                focus: self.search_form.focus,
            })),
            Overlay::Settings => Some(OverlayView::Settings(SettingsView {
                preset: self.settings_form.preset.as_str().to_string(),
            })),
            Overlay::Detail => {
                let detail = self.detail.as_ref()?;
                // title, subtitle, image, blank, box borders, footer chrome
                let max_lines = rows.saturating_sub(CHROME_ROWS + 6);
                let mut description_lines = wrap_text(&detail.description, inner_width);
                description_lines.truncate(max_lines);

                Some(OverlayView::Detail(DetailView {
                    title: detail.title.clone(),
                    subtitle: detail.subtitle.clone(),
                    image: detail.image.clone(),
                    description_lines,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::Selector;
    use crate::catalog;
    use crate::ui::viewmodel::HitTarget;

    fn state(page_size: usize) -> AppState {
        AppState::new(catalog::builtin(), "built-in", Theme::default(), page_size)
    }

    #[test]
    fn cursor_wraps_through_the_load_more_control() {
        let mut state = state(3);
        state.move_cursor_up();
        assert_eq!(state.cursor, 3);
        assert_eq!(state.cursor_target(), CursorTarget::LoadMore);

        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
        assert_eq!(state.cursor_target(), CursorTarget::Preview("dune".to_string()));
    }

    #[test]
    fn applying_filters_resets_page_and_cursor() {
        let mut state = state(2);
        state.show_more();
        state.cursor = 3;

        state.apply_filters(&Filters::default());
        assert_eq!(state.list.page(), 1);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn open_detail_for_unknown_id_changes_nothing() {
        let mut state = state(36);
        assert!(!state.open_detail("no-such-book"));
        assert!(state.detail.is_none());
        assert_eq!(state.input_mode(), InputMode::Browse);
    }

    #[test]
    fn viewmodel_windows_long_lists_around_the_cursor() {
        let mut state = state(36);
        state.cursor = 12;
        let vm = state.compute_viewmodel(14, 80);

        assert_eq!(vm.display_items.len(), 6);
        assert!(vm.display_items.iter().any(|item| item.is_selected));
        assert!(!vm.load_more.is_selected);
    }

    #[test]
    fn hit_test_maps_rows_to_what_was_drawn() {
        let state = state(4);
        let vm = state.compute_viewmodel(30, 80);

        assert_eq!(vm.hit_test(LIST_FIRST_ROW), Some(HitTarget::Preview("dune".to_string())));
        assert_eq!(
            vm.hit_test(LIST_FIRST_ROW + 1),
            Some(HitTarget::Preview("foundation".to_string()))
        );
        assert_eq!(vm.hit_test(LIST_FIRST_ROW + 4), None);
        assert_eq!(vm.hit_test(27), Some(HitTarget::LoadMore));
        assert_eq!(vm.hit_test(1), None);
    }

    #[test]
    fn empty_matches_show_the_empty_state() {
        let mut state = state(36);
        state.apply_filters(&Filters {
            title: "no book has this title".to_string(),
            ..Filters::default()
        });
        let vm = state.compute_viewmodel(24, 80);

        assert!(vm.display_items.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(vm.load_more.disabled);
        assert_eq!(vm.load_more.label, "No more books");
    }

    #[test]
    fn replacing_with_same_ids_refreshes_in_place() {
        let mut state = state(2);
        state.show_more();
        state.cursor = 2;

        let mut books = state.catalog.books().to_vec();
        books[0].title = "Dune (Revised)".to_string();
        let revised = Catalog::new(
            books,
            state.catalog.authors().clone(),
            state.catalog.genres().clone(),
        )
        .unwrap();
        state.replace_catalog(revised, "revised.json");

        assert_eq!(state.list.page(), 2);
        assert_eq!(state.cursor, 2);
        assert_eq!(state.list.previews()[0].title, "Dune (Revised)");
        assert_eq!(state.catalog_label, "revised.json");
    }

    #[test]
    fn reload_reruns_the_submitted_title_filter() {
        let mut state = state(36);
        state.search_form.title = "dune".to_string();
        state.apply_filters(&state.search_form.filters());
        assert_eq!(state.list.matches(), &[0]);

        let mut books = state.catalog.books().to_vec();
        books[0].title = "Arrakis".to_string();
        let retitled = Catalog::new(
            books,
            state.catalog.authors().clone(),
            state.catalog.genres().clone(),
        )
        .unwrap();
        state.replace_catalog(retitled, "retitled.json");

        assert!(state.list.matches().is_empty());
        assert!(state.list.previews().is_empty());
        assert_eq!(state.search_form.title, "dune");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn reload_rebuilds_dropdowns_and_keeps_selection() {
        let mut state = state(36);
        state
            .search_form
            .author
            .select(&Selector::Id("herbert".to_string()));
        state.apply_filters(&state.search_form.filters());

        let mut authors = state.catalog.authors().clone();
        authors.insert("herbert".to_string(), "F. P. Herbert".to_string());
        authors.insert("newcomer".to_string(), "New Writer".to_string());
        let renamed = Catalog::new(
            state.catalog.books().to_vec(),
            authors,
            state.catalog.genres().clone(),
        )
        .unwrap();
        state.replace_catalog(renamed, "renamed.json");

        assert_eq!(state.search_form.author.label(), "F. P. Herbert");
        assert!(state
            .search_form
            .author
            .select(&Selector::Id("newcomer".to_string())));
        assert_eq!(state.list.matches(), &[0]);
        assert_eq!(state.list.previews()[0].author, "F. P. Herbert");
    }

    #[test]
    fn reload_drops_selection_of_a_vanished_genre() {
        let mut state = state(36);
        state.apply_filters(&Filters {
            genre: Selector::Id("comedy".to_string()),
            ..Filters::default()
        });
        state
            .search_form
            .genre
            .select(&Selector::Id("comedy".to_string()));
        let comedies = state.list.matches().len();
        assert!(comedies < state.catalog.len());

        let mut genres = state.catalog.genres().clone();
        genres.shift_remove("comedy");
        let fewer = Catalog::new(
            state.catalog.books().to_vec(),
            state.catalog.authors().clone(),
            genres,
        )
        .unwrap();
        state.replace_catalog(fewer, "fewer.json");

        assert_eq!(state.filters.genre, Selector::Any);
        assert_eq!(state.search_form.genre.label(), "All Genres");
        assert_eq!(state.list.matches().len(), state.catalog.len());
    }

    #[test]
    fn replacing_with_different_books_starts_over() {
        let mut state = state(2);
        state.show_more();
        state.open_detail("dune");

        let books = state.catalog.books()[..3].to_vec();
        let smaller = Catalog::new(
            books,
            state.catalog.authors().clone(),
            state.catalog.genres().clone(),
        )
        .unwrap();
        state.replace_catalog(smaller, "small.json");

        assert_eq!(state.list.page(), 1);
        assert_eq!(state.list.matches().len(), 3);
        assert!(state.detail.is_none());
        assert_eq!(state.input_mode(), InputMode::Browse);
    }

    #[test]
    fn replacing_palette_keeps_preset() {
        let mut state = state(36);
        state.apply_preset(ThemePreset::Night);
        state.replace_palette(Palette::from_name("sepia").unwrap());

        assert_eq!(state.theme.preset(), ThemePreset::Night);
        assert_eq!(state.theme.palette_name(), "sepia");
        assert_eq!(state.theme.color_light(), Palette::from_name("sepia").unwrap().colors.dark);
    }
}
