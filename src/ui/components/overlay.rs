//! Overlay component renderers.
//!
//! Overlays are bordered boxes drawn over the list, one per panel: the search
//! form, the settings form and the book detail panel. Each box is
//! horizontally inset by [`OVERLAY_MARGIN`] and starts just below the header.

use crate::app::SearchField;
use crate::ui::helpers::{char_len, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, OverlayView, SearchView, SettingsView};

/// Horizontal margin for overlay boxes (spaces on left and right).
const OVERLAY_MARGIN: usize = 4;

/// First row of every overlay box.
const OVERLAY_TOP: usize = 4;

/// Renders `overlay` on top of whatever has been drawn.
pub fn render_overlay(overlay: &OverlayView, theme: &Theme, cols: usize) {
    let lines = match overlay {
        OverlayView::Search(search) => search_lines(search),
        OverlayView::Settings(settings) => settings_lines(settings),
        OverlayView::Detail(detail) => detail_lines(detail),
    };
    let title = match overlay {
        OverlayView::Search(_) => " Search ",
        OverlayView::Settings(_) => " Settings ",
        OverlayView::Detail(_) => " Book ",
    };

    render_box(OVERLAY_TOP, title, &lines, theme, cols);
}

/// One line of box content, optionally highlighted.
struct BoxLine {
    text: String,
    focused: bool,
    bold: bool,
}

impl BoxLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            focused: false,
            bold: false,
        }
    }
}

fn search_lines(search: &SearchView) -> Vec<BoxLine> {
    let field = |label: &str, value: &str, field: SearchField| BoxLine {
        text: format!(" {label:<8} {value}"),
        focused: search.focus == field,
        bold: false,
    };

    vec![
        field("Title", &format!("{}_", search.title), SearchField::Title),
        field("Genre", &format!("◂ {} ▸", search.genre), SearchField::Genre),
        field("Author", &format!("◂ {} ▸", search.author), SearchField::Author),
        BoxLine::plain(""),
        BoxLine::plain(" [Enter] Search   [Esc] Cancel"),
    ]
}

fn settings_lines(settings: &SettingsView) -> Vec<BoxLine> {
    vec![
        BoxLine {
            text: format!(" Theme    ◂ {} ▸", settings.preset),
            focused: true,
            bold: false,
        },
        BoxLine::plain(""),
        BoxLine::plain(" [Enter] Save   [Esc] Cancel"),
    ]
}

fn detail_lines(detail: &DetailView) -> Vec<BoxLine> {
    let mut lines = vec![
        BoxLine {
            text: format!(" {}", detail.title),
            focused: false,
            bold: true,
        },
        BoxLine::plain(format!(" {}", detail.subtitle)),
        BoxLine::plain(format!(" Cover: {}", detail.image)),
        BoxLine::plain(""),
    ];
    lines.extend(
        detail
            .description_lines
            .iter()
            .map(|line| BoxLine::plain(format!(" {line}"))),
    );
    lines
}

/// Draws a bordered box with `title` in the top border.
fn render_box(top: usize, title: &str, lines: &[BoxLine], theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(OVERLAY_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let title_len = char_len(title).min(inner_width);

    position_cursor(top, OVERLAY_MARGIN + 1);
    print!("{}", theme.text());
    print!("┌");
    print!("{}", Theme::bold());
    print!("{}", fit(title, title_len));
    print!("{}", Theme::reset());
    print!("{}", theme.text());
    print!("{}┐", "─".repeat(inner_width - title_len));

    for (offset, line) in lines.iter().enumerate() {
        position_cursor(top + 1 + offset, OVERLAY_MARGIN + 1);
        print!("{}", theme.text());
        print!("│");
        if line.focused {
            print!("{}", theme.inverted());
        }
        if line.bold {
            print!("{}", Theme::bold());
        }
        print!("{}", fit(&line.text, inner_width));
        print!("{}", Theme::reset());
        print!("{}", theme.text());
        print!("│");
    }

    position_cursor(top + 1 + lines.len(), OVERLAY_MARGIN + 1);
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}
