//! Input mode and search lifecycle types for the application.
//!
//! Two small state machines live here. [`InputMode`] controls how keyboard
//! input is interpreted (navigating results vs. typing a query).
//! [`SearchPhase`] is the lifecycle of the current search: it starts `Idle`
//! with a blank query, enters `Pending` when a fetch is emitted, and settles
//! into exactly one of `Loaded`, `Empty`, or `Failed`. A new submit or page
//! change re-enters `Pending` from any phase.

/// Current input handling mode.
///
/// Determines which keybindings are active and how character input is
/// processed. Also drives the footer hint text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating results: j/k move the cursor, arrows change page,
    /// enter opens details, `/` focuses the search box, q closes the pane.
    Normal,

    /// Typing in the search box: characters accumulate in the draft query,
    /// enter submits, esc cancels without submitting.
    Search,
}

/// Lifecycle phase of the current search.
///
/// Every display flag is derived from this phase together with the retained
/// outcome data; the phase itself never persists beyond the pane's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No search submitted (blank query). Nothing is fetched or shown.
    Idle,

    /// A fetch is in flight for the current `(query, page)` key. Rows from
    /// the previous key may still be rendered until the new outcome settles.
    Pending,

    /// The last fetch settled successfully with at least one movie.
    Loaded,

    /// The last fetch settled successfully with zero movies; the one-shot
    /// notice has been set.
    Empty,

    /// The last fetch settled with a failure; the inline error is shown and
    /// results and pagination are suppressed.
    Failed,
}
