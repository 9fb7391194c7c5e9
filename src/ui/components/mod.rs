//! Composable UI component renderers.
//!
//! Each component renders one part of the pane; [`render_screen`] composes
//! them into the full layout and decides which body variant is visible.
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Box - 3 lines]
//! [Body: idle welcome | loading | banner | result list]
//! [Blank padding]
//! [Pagination]           (only with displayable results)
//! [Border]
//! [Footer]
//! [Detail Modal overlay] (only with a selection)
//! ```
//!
//! The body variants are mutually exclusive by construction: banners only
//! exist once results are cleared, and the loading indicator only shows when
//! nothing is retained to display instead.

mod banner;
mod empty;
mod footer;
mod header;
mod loading;
mod modal;
mod pagination;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the complete pane from a view model.
///
/// # Parameters
///
/// * `vm` - View model with display rows and metadata
/// * `theme` - Active color theme
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render_screen(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = header::render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = search::render_search_bar(current_row, &vm.search_bar, theme, cols);

    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(current_row + 2, empty, theme, cols);
    } else if vm.loading {
        loading::render_loading(current_row + 2, theme, cols);
    } else if let Some(banner) = &vm.banner {
        banner::render_banner(current_row + 1, banner, theme, cols);
    } else if !vm.rows.is_empty() {
        current_row = table::render_table_headers(current_row, theme, cols);
        let _ = table::render_table_rows(current_row, &vm.rows, theme, cols);
    }

    if let Some(pagination) = &vm.pagination {
        pagination::render_pagination(rows.saturating_sub(3), pagination, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    render_border(footer_start.saturating_sub(1), &theme.colors.border, cols);
    footer::render_footer(footer_start, &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        modal::render_modal(modal, theme, rows, cols);
    }
}
