//! Loading indicator component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Text shown while a fetch is in flight with nothing retained to display.
const LOADING_TEXT: &str = "Searching the catalog...";

/// Renders the centered loading indicator at the specified row.
pub fn render_loading(row: usize, theme: &Theme, cols: usize) {
    let padding = cols.saturating_sub(LOADING_TEXT.len()) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{LOADING_TEXT}");
    print!("{}", Theme::reset());
}
