//! Shared rendering utilities and helpers.
//!
//! Low-level text utilities used across the UI components. All widths are
//! measured in characters, not bytes, so titles with accents or typographic
//! quotes line up.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` centered in a full-width line at `row`, prefixed by the
/// escape sequences in `style`.
///
/// Text wider than the pane is truncated.
pub fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let left = cols.saturating_sub(char_len(&text)) / 2;
    let right = cols.saturating_sub(left + char_len(&text));

    position_cursor(row, 1);
    print!("{style}{}{text}{}\u{1b}[0m", " ".repeat(left), " ".repeat(right));
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, ending in `…` when cut.
///
/// # Example
///
/// ```rust
/// use bookcase::ui::helpers::truncate;
///
/// assert_eq!(truncate("The Left Hand of Darkness", 12), "The Left Ha…");
/// assert_eq!(truncate("Mort", 12), "Mort");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Truncates `text` to `width` characters and pads it with spaces to exactly
/// `width`.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let padding = width.saturating_sub(char_len(&cut));
    format!("{cut}{}", " ".repeat(padding))
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are split. Blank input yields no lines.
///
/// # Example
///
/// ```rust
/// use bookcase::ui::helpers::wrap_text;
///
/// assert_eq!(
///     wrap_text("a tale of two worlds", 10),
///     vec!["a tale of", "two worlds"]
/// );
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let line_len = char_len(&line);
        if !line.is_empty() && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Café society", 5), "Café…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(char_len(&fit("Rendezvous with Rama", 8)), 8);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn wrap_keeps_lines_within_width() {
        let text = "A desert planet, a spice that extends life, and a boy who may be a messiah.";
        for line in wrap_text(text, 20) {
            assert!(char_len(&line) <= 20, "{line:?} too long");
        }
    }
}
