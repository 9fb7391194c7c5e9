//! View model types representing renderable UI state.
//!
//! Immutable view models computed from application state. They contain no
//! business logic, only display-ready data: windowed result rows, the
//! pagination summary, the active banner, and the optional detail modal.
//! Created via `AppState::compute_viewmodel()` and consumed by the renderer.

/// Complete view model for one repaint of the pane.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (title, result count).
    pub header: HeaderInfo,

    /// Search box contents and focus state. Always rendered.
    pub search_bar: SearchBarInfo,

    /// Visible window of result rows.
    pub rows: Vec<MovieRow>,

    /// Cursor position relative to the visible window.
    pub selected_index: usize,

    /// Pagination summary; present only alongside displayable results.
    pub pagination: Option<PaginationInfo>,

    /// Inline error or one-shot empty-result notice.
    pub banner: Option<Banner>,

    /// True while fetching with nothing retained to show instead.
    pub loading: bool,

    /// Detail view contents; present exactly when a movie is selected.
    pub modal: Option<ModalInfo>,

    /// Idle welcome message, shown before any search is submitted.
    pub empty_state: Option<EmptyState>,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,
}

/// One row of the result list.
#[derive(Debug, Clone)]
pub struct MovieRow {
    /// Title, truncated to the available column width.
    pub title: String,

    /// Release year, or `"n/a"` when the provider gave no usable date.
    pub year: String,

    /// Rating formatted to one decimal place.
    pub rating: String,

    /// Whether the cursor is on this row.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Query text to show: the draft while typing, the submitted query
    /// otherwise.
    pub query: String,

    /// Whether the box currently has input focus.
    pub focused: bool,
}

/// Pagination summary for the current result set.
#[derive(Debug, Clone)]
pub struct PaginationInfo {
    /// Current 1-based page.
    pub current: u32,

    /// Total pages the provider reported.
    pub total: u32,
}

/// Distinguishes the two banner roles, which render in different colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// Persistent inline error from a failed fetch.
    Error,

    /// One-shot notice for a successful fetch with zero results.
    Notice,
}

/// A single-line message banner.
#[derive(Debug, Clone)]
pub struct Banner {
    /// Which role this banner plays.
    pub kind: BannerKind,

    /// Message text, rendered verbatim.
    pub message: String,
}

/// Detail modal contents for the selected movie.
#[derive(Debug, Clone)]
pub struct ModalInfo {
    /// Movie title.
    pub title: String,

    /// Release year, or `"unknown"`.
    pub year: String,

    /// Rating formatted to one decimal place.
    pub rating: String,

    /// Plot summary; a placeholder when the provider sent none.
    pub overview: String,
}

/// Idle welcome message, shown when no search has been submitted.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
