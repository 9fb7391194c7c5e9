//! Banner component renderer.
//!
//! Renders the single-line message banner: the persistent inline error of a
//! failed fetch, or the one-shot notice of an empty result. The two roles
//! share a layout and differ only in color.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Banner, BannerKind};

/// Renders a banner centered at the specified row.
///
/// Returns the next available row position.
pub fn render_banner(row: usize, banner: &Banner, theme: &Theme, cols: usize) -> usize {
    let color = match banner.kind {
        BannerKind::Error => &theme.colors.error_fg,
        BannerKind::Notice => &theme.colors.notice_fg,
    };

    let text_len = banner.message.chars().count().min(cols);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{}", banner.message);
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
