//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and settled fetch outcomes, translating them into state changes and action
//! sequences. It is the primary control flow coordinator for the plugin.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Search lifecycle rules enforced here
//!
//! - A blank submitted query never emits a fetch; results are cleared and
//!   the search returns to `Idle`.
//! - Submitting always resets the page to 1; changing page keeps the query.
//! - Rows from the previous key stay in state while a fetch for a newer key
//!   is in flight, and are only replaced when the matching outcome settles.
//! - A settled outcome whose request does not equal the in-flight key is
//!   discarded without touching state (last-key-wins).
//! - A successful outcome with zero movies sets the one-shot notice at the
//!   transition into `Empty`; nothing at render time can re-fire it.

use crate::app::{Action, AppState};
use crate::catalog::{SearchOutcome, SearchRequest};
use crate::domain::error::Result;

use super::modes::{InputMode, SearchPhase};

/// Notice shown when a search settles successfully with zero results.
pub const NO_RESULTS_NOTICE: &str = "No movies found for your request.";

/// Events triggered by user input or settled fetch outcomes.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, so state
/// transitions are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the result cursor down by one row (wraps to top).
    KeyDown,
    /// Moves the result cursor up by one row (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Opens the detail view for the movie under the cursor.
    SelectMovie,
    /// Closes the detail view.
    CloseDetail,
    /// Focuses the search box and starts a fresh draft query.
    SearchMode,
    /// Leaves the search box without submitting, discarding the draft.
    ExitSearch,
    /// Appends a character to the draft query.
    Char(char),
    /// Removes the last character from the draft query.
    Backspace,
    /// Submits the draft query: page resets to 1 and a fetch is emitted
    /// unless the query is blank.
    SubmitSearch,
    /// Selects a result page by zero-based index from the pagination
    /// control; the stored page becomes `index + 1`.
    PageSelected(usize),
    /// A fetch settled. Carries the request it answers so stale results can
    /// be recognized and dropped.
    FetchSettled {
        /// The `(query, page)` key this outcome answers.
        request: SearchRequest,
        /// The normalized envelope from the query service.
        outcome: SearchOutcome,
    },
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(should_render, actions)`: whether the UI needs a repaint, and
/// the side effects the runtime must execute in order.
///
/// # Errors
///
/// Propagates errors from state mutation seams; the current transitions are
/// all infallible, so callers mostly see `Ok`.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            if state.input_mode != InputMode::Normal || state.selected.is_some() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.input_mode != InputMode::Normal || state.selected.is_some() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SelectMovie => {
            if state.selected.is_some() {
                return Ok((false, vec![]));
            }
            match state.movie_under_cursor().cloned() {
                Some(movie) => {
                    tracing::debug!(movie_id = movie.id, title = %movie.title, "opening detail view");
                    state.selected = Some(movie);
                    Ok((true, vec![]))
                }
                None => Ok((false, vec![])),
            }
        }
        Event::CloseDetail => {
            if state.selected.take().is_some() {
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            state.draft_query = String::new();
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(draft = %state.draft_query, "leaving search mode without submit");
            state.input_mode = InputMode::Normal;
            state.draft_query = String::new();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.draft_query.push(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.draft_query.pop();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => Ok(submit_search(state)),
        Event::PageSelected(index) => Ok(select_page(state, *index)),
        Event::FetchSettled { request, outcome } => Ok(apply_settled(state, request, outcome)),
    }
}

/// Submits the draft query: stores it, resets the page, and either emits a
/// fetch or suppresses the call entirely for a blank query.
fn submit_search(state: &mut AppState) -> (bool, Vec<Action>) {
    state.input_mode = InputMode::Normal;
    state.search_query = std::mem::take(&mut state.draft_query);
    state.page = 1;
    state.notice = None;
    state.error = None;
    state.selected = None;

    if state.search_query.trim().is_empty() {
        tracing::debug!("blank query submitted, suppressing fetch");
        state.phase = SearchPhase::Idle;
        state.in_flight = None;
        state.clear_results();
        return (true, vec![]);
    }

    let request = SearchRequest::first_page(state.search_query.clone());
    tracing::debug!(query = %request.query, "search submitted");
    state.phase = SearchPhase::Pending;
    state.in_flight = Some(request.clone());

    (true, vec![Action::Fetch(request)])
}

/// Changes the result page, keeping the query and retaining the rows of the
/// previous page until the new outcome settles.
fn select_page(state: &mut AppState, index: usize) -> (bool, Vec<Action>) {
    if state.search_query.trim().is_empty() {
        return (false, vec![]);
    }

    let mut target = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
    if let Some(total) = state.total_pages {
        target = target.min(total.max(1));
    }
    if target == state.page {
        return (false, vec![]);
    }

    tracing::debug!(query = %state.search_query, from = state.page, to = target, "page change");
    state.page = target;
    state.notice = None;
    state.error = None;
    state.selected = None;
    state.phase = SearchPhase::Pending;

    let request = SearchRequest::for_page(state.search_query.clone(), target);
    state.in_flight = Some(request.clone());

    (true, vec![Action::Fetch(request)])
}

/// Applies a settled outcome, discarding it when its key has been superseded.
fn apply_settled(
    state: &mut AppState,
    request: &SearchRequest,
    outcome: &SearchOutcome,
) -> (bool, Vec<Action>) {
    if state.in_flight.as_ref() != Some(request) {
        tracing::debug!(
            settled_query = %request.query,
            settled_page = request.page,
            "discarding settled outcome for superseded request"
        );
        return (false, vec![]);
    }
    state.in_flight = None;

    match outcome {
        SearchOutcome::Failure { message } => {
            tracing::debug!(error = %message, "fetch failed");
            state.phase = SearchPhase::Failed;
            state.error = Some(message.clone());
            state.notice = None;
            state.clear_results();
        }
        SearchOutcome::Success { movies, .. } if movies.is_empty() => {
            tracing::debug!(query = %request.query, "fetch settled with zero results");
            state.phase = SearchPhase::Empty;
            state.notice = Some(NO_RESULTS_NOTICE.to_string());
            state.error = None;
            state.clear_results();
        }
        SearchOutcome::Success { movies, total_pages } => {
            tracing::debug!(
                query = %request.query,
                page = request.page,
                result_count = movies.len(),
                total_pages = total_pages,
                "fetch settled with results"
            );
            state.phase = SearchPhase::Loaded;
            state.movies = movies.clone();
            state.total_pages = Some(*total_pages);
            state.error = None;
            state.notice = None;
            state.selected_index = 0;
        }
    }

    (true, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Movie;
    use crate::ui::theme::Theme;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: 6.0,
        }
    }

    fn success(count: u64, total_pages: u32) -> SearchOutcome {
        SearchOutcome::Success {
            movies: (0..count).map(|i| movie(i, &format!("movie-{i}"))).collect(),
            total_pages,
        }
    }

    fn submit(state: &mut AppState, query: &str) -> Vec<Action> {
        let _ = handle_event(state, &Event::SearchMode).unwrap();
        for c in query.chars() {
            let _ = handle_event(state, &Event::Char(c)).unwrap();
        }
        let (_, actions) = handle_event(state, &Event::SubmitSearch).unwrap();
        actions
    }

    fn settle(state: &mut AppState, query: &str, page: u32, outcome: SearchOutcome) {
        let event = Event::FetchSettled {
            request: SearchRequest::for_page(query, page),
            outcome,
        };
        let _ = handle_event(state, &event).unwrap();
    }

    #[test]
    fn blank_query_suppresses_fetch() {
        let mut state = AppState::new(Theme::default());
        let actions = submit(&mut state, "   ");

        assert!(actions.is_empty());
        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(!state.has_results());
        assert!(state.in_flight.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn submit_fetches_first_page() {
        let mut state = AppState::new(Theme::default());
        let actions = submit(&mut state, "batman");

        assert_eq!(
            actions,
            vec![Action::Fetch(SearchRequest::first_page("batman"))]
        );
        assert_eq!(state.page, 1);
        assert!(state.is_pending());
    }

    #[test]
    fn submit_resets_page_regardless_of_prior_page() {
        let mut state = AppState::new(Theme::default());
        submit(&mut state, "batman");
        settle(&mut state, "batman", 1, success(20, 5));
        let _ = handle_event(&mut state, &Event::PageSelected(3)).unwrap();
        settle(&mut state, "batman", 4, success(20, 5));
        assert_eq!(state.page, 4);

        let actions = submit(&mut state, "superman");
        assert_eq!(state.page, 1);
        assert_eq!(
            actions,
            vec![Action::Fetch(SearchRequest::first_page("superman"))]
        );
    }

    #[test]
    fn successful_fetch_populates_results_and_pagination() {
        let mut state = AppState::new(Theme::default());
        submit(&mut state, "batman");
        settle(&mut state, "batman", 1, success(20, 3));

        assert!(state.has_results());
        assert_eq!(state.movies.len(), 20);
        assert_eq!(state.total_pages, Some(3));
        assert!(state.notice.is_none());
        assert_eq!(state.phase, SearchPhase::Loaded);
    }

    #[test]
    fn empty_success_sets_one_shot_notice() {
        let mut state = AppState::new(Theme::default());
        submit(&mut state, "zzzxxqqq123");
        settle(&mut state, "zzzxxqqq123", 1, success(0, 1));

        assert_eq!(state.phase, SearchPhase::Empty);
        assert_eq!(state.notice.as_deref(), Some(NO_RESULTS_NOTICE));
        assert!(!state.has_results());
        assert!(state.total_pages.is_none());

        // Re-render-style events do not touch the settled notice, and a
        // duplicate settle for the now-cleared key is discarded outright.
        let (_, _) = handle_event(&mut state, &Event::KeyDown).unwrap();
        settle(&mut state, "zzzxxqqq123", 1, success(0, 1));
        assert_eq!(state.notice.as_deref(), Some(NO_RESULTS_NOTICE));

        // The next submit clears it.
        submit(&mut state, "batman");
        assert!(state.notice.is_none());
    }

    #[test]
    fn failure_surfaces_message_and_hides_results() {
        let mut state = AppState::new(Theme::default());
        submit(&mut state, "batman");
        settle(&mut state, "batman", 1, success(20, 3));

        let _ = handle_event(&mut state, &Event::PageSelected(1)).unwrap();
        settle(
            &mut state,
            "batman",
            2,
            SearchOutcome::Failure { message: "Invalid API key".to_string() },
        );

        assert!(state.is_error());
        assert_eq!(state.error.as_deref(), Some("Invalid API key"));
        assert!(!state.has_results());
        assert!(state.total_pages.is_none());
    }

    #[test]
    fn page_change_keeps_query_and_retains_rows_until_settled() {
        let mut state = AppState::new(Theme::default());
        submit(&mut state, "batman");
        settle(&mut state, "batman", 1, success(20, 3));

        let (_, actions) = handle_event(&mut state, &Event::PageSelected(1)).unwrap();
        assert_eq!(
            actions,
            vec![Action::Fetch(SearchRequest::for_page("batman", 2))]
        );
        assert_eq!(state.search_query, "batman");
        assert_eq!(state.page, 2);

        // Stale-while-revalidate: page-1 rows are still on screen.
        assert!(state.is_pending());
        assert!(state.has_results());
        assert_eq!(state.movies.len(), 20);

        settle(&mut state, "batman", 2, success(7, 3));
        assert_eq!(state.movies.len(), 7);
        assert_eq!(state.phase, SearchPhase::Loaded);
    }

    #[test]
    fn stale_outcome_never_overwrites_newer_key() {
        let mut state = AppState::new(Theme::default());
        submit(&mut state, "batman");
        let _ = handle_event(&mut state, &Event::PageSelected(1)).unwrap();

        // The page-1 response arrives after page 2 became the active key.
        settle(&mut state, "batman", 1, success(20, 3));
        assert!(state.is_pending());
        assert!(state.movies.is_empty());

        settle(&mut state, "batman", 2, success(7, 3));
        assert_eq!(state.movies.len(), 7);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn page_change_without_query_is_ignored() {
        let mut state = AppState::new(Theme::default());
        let (rendered, actions) = handle_event(&mut state, &Event::PageSelected(1)).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn page_change_is_clamped_to_reported_total() {
        let mut state = AppState::new(Theme::default());
        submit(&mut state, "batman");
        settle(&mut state, "batman", 1, success(20, 3));

        let (_, actions) = handle_event(&mut state, &Event::PageSelected(9)).unwrap();
        assert_eq!(
            actions,
            vec![Action::Fetch(SearchRequest::for_page("batman", 3))]
        );
    }

    #[test]
    fn selection_opens_and_closes_detail_view() {
        let mut state = AppState::new(Theme::default());
        submit(&mut state, "batman");
        settle(&mut state, "batman", 1, success(3, 1));

        let _ = handle_event(&mut state, &Event::KeyDown).unwrap();
        let _ = handle_event(&mut state, &Event::SelectMovie).unwrap();
        assert_eq!(state.selected.as_ref().map(|m| m.id), Some(1));

        // Cursor movement is inert while the detail view is open.
        let (rendered, _) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(!rendered);
        assert_eq!(state.selected_index, 1);

        let _ = handle_event(&mut state, &Event::CloseDetail).unwrap();
        assert!(state.selected.is_none());
    }

    #[test]
    fn exit_search_discards_draft_without_fetching() {
        let mut state = AppState::new(Theme::default());
        submit(&mut state, "batman");
        settle(&mut state, "batman", 1, success(5, 1));

        let _ = handle_event(&mut state, &Event::SearchMode).unwrap();
        let _ = handle_event(&mut state, &Event::Char('x')).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::ExitSearch).unwrap();

        assert!(actions.is_empty());
        assert_eq!(state.search_query, "batman");
        assert_eq!(state.movies.len(), 5);
        assert_eq!(state.input_mode, InputMode::Normal);
    }
}
