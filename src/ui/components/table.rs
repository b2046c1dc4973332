//! Table component renderer.
//!
//! Renders the preview list as a three-column table (TITLE, AUTHOR, COVER)
//! followed, further down, by the "Show more" control.

use crate::ui::helpers::{char_len, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, LoadMoreInfo};

/// Column widths for a pane `cols` wide: title, author, cover.
const fn column_widths(cols: usize) -> (usize, usize, usize) {
    let title = cols * 2 / 5;
    let author = cols / 4;
    (title, author, cols.saturating_sub(title + author))
}

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let (title_w, author_w, cover_w) = column_widths(cols);

    position_cursor(row, 1);
    print!("{}", theme.text());
    print!("{}", Theme::bold());
    print!(
        "{}{}{}",
        fit(" TITLE", title_w),
        fit("AUTHOR", author_w),
        fit("COVER", cover_w)
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all preview rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single preview row.
///
/// The selected row is drawn inverted across the full width so the cursor
/// stays visible under both presets.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let (title_w, author_w, cover_w) = column_widths(cols);

    position_cursor(row, 1);
    if item.is_selected {
        print!("{}", theme.inverted());
    } else {
        print!("{}", theme.text());
    }

    print!("{}", fit(&format!(" {}", item.title), title_w));
    print!("{}", fit(&item.author, author_w));
    print!("{}", Theme::dim());
    print!("{}", fit(&item.image, cover_w));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the "Show more" control centered on `row`.
///
/// Disabled controls are dimmed; the control is inverted when the cursor is
/// on it.
pub fn render_load_more(row: usize, load_more: &LoadMoreInfo, theme: &Theme, cols: usize) {
    let label = format!("[ {} ]", load_more.label);
    let label_len = char_len(&label);
    let padding = cols.saturating_sub(label_len) / 2;

    position_cursor(row, 1);
    print!("{}", theme.text());
    print!("{}", " ".repeat(padding));
    if load_more.is_selected {
        print!("{}", theme.inverted());
    }
    if load_more.disabled {
        print!("{}", Theme::dim());
    }
    print!("{label}");
    print!("{}", Theme::reset());
    print!("{}", theme.text());
    print!("{}", " ".repeat(cols.saturating_sub(padding + label_len)));
    print!("{}", Theme::reset());
}
