//! Detail modal component renderer.
//!
//! Renders the selected movie's details in a centered bordered box drawn
//! over the rest of the pane: title, year and rating line, then the wrapped
//! overview. Drawn last so it overlays whatever the body rendered.

use crate::ui::helpers::{position_cursor, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

/// Preferred modal width, capped by the terminal width.
const MODAL_MAX_WIDTH: usize = 70;

/// Rows of chrome inside the modal besides overview lines: top border, title,
/// meta line, blank separator, bottom border.
const MODAL_CHROME_ROWS: usize = 5;

/// Renders the detail modal centered in the pane.
pub fn render_modal(modal: &ModalInfo, theme: &Theme, rows: usize, cols: usize) {
    let box_width = MODAL_MAX_WIDTH.min(cols.saturating_sub(4)).max(20);
    let inner_width = box_width - 2;
    let text_width = inner_width.saturating_sub(2);

    let max_overview_lines = rows
        .saturating_sub(MODAL_CHROME_ROWS)
        .saturating_sub(6)
        .max(1);
    let mut overview_lines = wrap_text(&modal.overview, text_width);
    if overview_lines.len() > max_overview_lines {
        overview_lines.truncate(max_overview_lines);
        if let Some(last) = overview_lines.last_mut() {
            last.push_str(" ...");
        }
    }

    let box_height = MODAL_CHROME_ROWS + overview_lines.len();
    let top = rows.saturating_sub(box_height) / 2;
    let top = top.max(2);
    let left = cols.saturating_sub(box_width) / 2 + 1;

    let border = &theme.colors.modal_border;

    position_cursor(top, left);
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let title = clip(&modal.title, text_width);
    render_modal_line(top + 1, left, inner_width, border, theme, |theme| {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(" {title}");
        title.chars().count() + 1
    });

    let meta = format!(" {}   {} / 10", modal.year, modal.rating);
    let meta = clip(&meta, text_width + 1);
    render_modal_line(top + 2, left, inner_width, border, theme, |theme| {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
        print!("{meta}");
        meta.chars().count()
    });

    render_modal_line(top + 3, left, inner_width, border, theme, |_| 0);

    for (i, line) in overview_lines.iter().enumerate() {
        render_modal_line(top + 4 + i, left, inner_width, border, theme, |theme| {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!(" {line}");
            line.chars().count() + 1
        });
    }

    position_cursor(top + 4 + overview_lines.len(), left);
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Renders one bordered modal line: left border, content via `content`
/// (which returns the printed width), right-padding, right border.
fn render_modal_line<F>(
    row: usize,
    left: usize,
    inner_width: usize,
    border: &str,
    theme: &Theme,
    content: F,
) where
    F: FnOnce(&Theme) -> usize,
{
    position_cursor(row, left);
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    let printed = content(theme);

    print!("{}", " ".repeat(inner_width.saturating_sub(printed)));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());
}

/// Clips text to a maximum character count, appending `...` when cut.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
