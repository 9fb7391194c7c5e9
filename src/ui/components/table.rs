//! Result list component renderer.
//!
//! Renders the movie results as a three-column table (TITLE, YEAR, RATING)
//! with full-row selection highlighting.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MovieRow;

/// Fixed width of the YEAR column.
const YEAR_COLUMN_WIDTH: usize = 6;

/// Fixed width of the RATING column.
const RATING_COLUMN_WIDTH: usize = 6;

/// Width of everything except the TITLE column. Must stay in sync with the
/// title truncation applied during view model computation.
const RESERVED_WIDTH: usize = YEAR_COLUMN_WIDTH + RATING_COLUMN_WIDTH + 4;

/// Renders the column headers at the specified row.
///
/// Returns the next available row position.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let title_width = title_column_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "  {:<title_width$} {:>YEAR_COLUMN_WIDTH$} {:>RATING_COLUMN_WIDTH$}",
        "TITLE", "YEAR", "RATING"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all result rows starting at the specified row.
///
/// Returns the next available row position.
pub fn render_table_rows(row: usize, items: &[MovieRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single result row.
///
/// The row is padded to the full terminal width so the selection background
/// covers the whole line. The rating takes its accent color only on
/// unselected rows, where it does not fight the selection colors.
fn render_table_row(row: usize, item: &MovieRow, theme: &Theme, cols: usize) -> usize {
    let title_width = title_column_width(cols);

    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!("  {:<title_width$} {:>YEAR_COLUMN_WIDTH$} ", item.title, item.year);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
    }
    print!("{:>RATING_COLUMN_WIDTH$}", item.rating);

    let line_len = 2 + title_width + 1 + YEAR_COLUMN_WIDTH + 1 + RATING_COLUMN_WIDTH;
    if item.is_selected {
        print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    }

    print!("{}", Theme::reset());
    row + 1
}

/// Width left for the TITLE column at the given terminal width.
fn title_column_width(cols: usize) -> usize {
    cols.saturating_sub(RESERVED_WIDTH).max(8)
}
