//! Composable UI component renderers.
//!
//! Each component is responsible for rendering a specific part of the
//! interface at an explicit row.
//!
//! # Components
//!
//! - [`header`]: Title bar with catalog label, counts and header actions
//! - [`footer`]: Help text and keybinding hints
//! - [`table`]: Preview list (TITLE, AUTHOR, COVER) and the "Show more" control
//! - [`empty`]: Empty state message when nothing matches
//! - [`overlay`]: Search, settings and detail boxes
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Blank padding to fill screen]
//! [Show more]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod overlay;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use overlay::render_overlay;
use table::{render_load_more, render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.text());
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Paints every row with the light variable so the whole pane follows the
/// active preset.
fn render_background(theme: &Theme, rows: usize, cols: usize) {
    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{}{}{}", theme.text(), " ".repeat(cols), Theme::reset());
    }
}

/// Renders the list layout, then the topmost overlay over it.
pub fn render_list_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    render_background(theme, rows, cols);

    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, theme, cols);
    current_row = render_table_headers(current_row, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        let _current_row = render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_load_more(vm.layout.load_more_row, &vm.load_more, theme, cols);
    render_border(border_row, theme, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    if let Some(overlay) = &vm.overlay {
        render_overlay(overlay, theme, cols);
    }
}
