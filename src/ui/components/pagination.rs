//! Pagination component renderer.
//!
//! Renders the page position line under the result list. Only called when
//! the view model carries pagination, i.e. alongside displayable results.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the centered page indicator at the specified row.
pub fn render_pagination(row: usize, pagination: &PaginationInfo, theme: &Theme, cols: usize) {
    let left_hint = if pagination.current > 1 { "◂ h " } else { "    " };
    let right_hint = if pagination.current < pagination.total { " l ▸" } else { "    " };
    let text = format!(
        "{left_hint} Page {} of {} {right_hint}",
        pagination.current, pagination.total
    );

    let text_len = text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", Theme::reset());
}
