//! Header component renderer.
//!
//! Renders the title bar: catalog label and match counts on the left, the
//! header action shortcuts on the right.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// TITLE [padding] ACTIONS
/// ```
///
/// The bar is drawn inverted. When the pane is too narrow for both parts,
/// the actions are dropped and the title is truncated.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let actions_len = char_len(&header.actions) + 1;
    let (title, actions) = if char_len(&header.title) + actions_len <= cols {
        (header.title.clone(), format!("{} ", header.actions))
    } else {
        (truncate(&header.title, cols), String::new())
    };
    let padding = cols.saturating_sub(char_len(&title) + char_len(&actions));

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", theme.inverted());
    print!("{title}");
    print!("{}", " ".repeat(padding));
    print!("{actions}");
    print!("{}", Theme::reset());
    row + 1
}
