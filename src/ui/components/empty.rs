//! Empty state component renderer.
//!
//! Shown in place of the list when no book matches the current filters.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message below `row`.
///
/// ```text
/// [blank line]
/// MESSAGE      (bold, centered)
/// subtitle     (dim, centered)
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let text = theme.text();
    print_centered(row + 1, &empty.message, &format!("{text}{}", Theme::bold()), cols);
    print_centered(row + 2, &empty.subtitle, &format!("{text}{}", Theme::dim()), cols);
}
