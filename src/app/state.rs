//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, the single source of truth for all transient UI state. The search
//! coordinator's working set lives here: the submitted query, the draft query
//! being typed, the current page, retained results, the in-flight request
//! key, the selected movie, and the one-shot empty-result notice.
//!
//! # Derived state
//!
//! Display flags are never stored. `is_pending`, `is_error`, `is_empty`, and
//! `has_results` are computed deterministically from the search phase and the
//! retained outcome data, and [`AppState::compute_viewmodel`] turns a state
//! snapshot plus terminal dimensions into a renderable view model.
//!
//! # Retention invariants
//!
//! `movies` is non-empty only after a successful fetch with results, and is
//! retained through a subsequent `Pending` phase so the previous page stays
//! on screen while the next one is in flight. `Idle`, `Empty`, and `Failed`
//! always clear it. Modal visibility is implied by `selected` being non-null;
//! there is no separate open/closed flag.

use super::modes::{InputMode, SearchPhase};
use crate::catalog::SearchRequest;
use crate::domain::Movie;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Banner, BannerKind, EmptyState, FooterInfo, HeaderInfo, ModalInfo, MovieRow, PaginationInfo,
    SearchBarInfo, UiViewModel,
};

/// Central application state container.
///
/// Mutated exclusively by the event handler in response to user input and
/// settled fetch outcomes; the single logical writer is the plugin event loop.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The submitted search query. Blank means no search is active.
    pub search_query: String,

    /// The query text currently being typed in the search box. Becomes the
    /// submitted query on submit; discarded on cancel.
    pub draft_query: String,

    /// Current 1-based page number within the submitted query's results.
    pub page: u32,

    /// Results retained for display. May belong to the previous `(query,
    /// page)` key while a fetch for a newer key is in flight.
    pub movies: Vec<Movie>,

    /// Total page count the provider reported for the submitted query.
    pub total_pages: Option<u32>,

    /// Inline error from the last settled fetch, if it failed.
    pub error: Option<String>,

    /// One-shot notice set when a fetch settles successfully with zero
    /// results. Set at the transition, cleared by the next submit or page
    /// change; re-rendering never re-fires it.
    pub notice: Option<String>,

    /// Lifecycle phase of the current search.
    pub phase: SearchPhase,

    /// Zero-based cursor position within `movies`.
    pub selected_index: usize,

    /// The movie whose details are open. Non-null implies the modal is
    /// visible.
    pub selected: Option<Movie>,

    /// Key of the fetch currently in flight. Settled outcomes for any other
    /// key are discarded (last-key-wins).
    pub in_flight: Option<SearchRequest>,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a fresh state with no active search.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            search_query: String::new(),
            draft_query: String::new(),
            page: 1,
            movies: vec![],
            total_pages: None,
            error: None,
            notice: None,
            phase: SearchPhase::Idle,
            selected_index: 0,
            selected: None,
            in_flight: None,
            input_mode: InputMode::Normal,
            theme,
        }
    }

    /// True while a fetch is in flight for the current key.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, SearchPhase::Pending)
    }

    /// True when the last settled fetch failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.phase, SearchPhase::Failed)
    }

    /// True when the last settled fetch succeeded with zero results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.phase, SearchPhase::Empty)
    }

    /// True when result rows are available for display.
    ///
    /// Holds through a `Pending` phase that retains the previous page's rows,
    /// which is what keeps the list on screen while the next page loads.
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.movies.is_empty()
    }

    /// Clears retained results and resets the cursor.
    pub fn clear_results(&mut self) {
        self.movies.clear();
        self.total_pages = None;
        self.selected_index = 0;
    }

    /// Moves the cursor down by one row, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.movies.len();
    }

    /// Moves the cursor up by one row, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.movies.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the movie under the cursor, if any.
    #[must_use]
    pub fn movie_under_cursor(&self) -> Option<&Movie> {
        self.movies.get(self.selected_index)
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Handles result windowing (centering the visible slice on the cursor),
    /// display-flag projection, and per-mode footer hints. The renderer
    /// consumes the result without touching `AppState` again.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let available_rows = Self::calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.movies.len());
        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.movies.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let row_items: Vec<MovieRow> = self.movies[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, movie)| {
                self.compute_row(movie, visible_start + relative_idx, cols)
            })
            .collect();

        UiViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            rows: row_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            pagination: self.compute_pagination(),
            banner: self.compute_banner(),
            loading: self.is_pending() && self.movies.is_empty(),
            modal: self.compute_modal(),
            empty_state: self.compute_empty_state(),
            footer: self.compute_footer(),
        }
    }

    /// Builds one display row for a movie within the visible window.
    fn compute_row(&self, movie: &Movie, absolute_idx: usize, cols: usize) -> MovieRow {
        // year (6) + rating (6) + margins
        const RESERVED_WIDTH: usize = 16;

        let max_title = cols.saturating_sub(RESERVED_WIDTH).max(8);
        let title = if movie.title.chars().count() > max_title {
            let kept: String = movie.title.chars().take(max_title.saturating_sub(3)).collect();
            format!("{kept}...")
        } else {
            movie.title.clone()
        };

        MovieRow {
            title,
            year: movie
                .release_year()
                .map_or_else(|| "n/a".to_string(), |y| y.to_string()),
            rating: movie.rating_label(),
            is_selected: absolute_idx == self.selected_index && self.selected.is_none(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.has_results() {
            format!(" Zinema ({} titles) ", self.movies.len())
        } else {
            " Zinema ".to_string()
        };
        HeaderInfo { title }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let focused = self.input_mode == InputMode::Search;
        SearchBarInfo {
            query: if focused {
                self.draft_query.clone()
            } else {
                self.search_query.clone()
            },
            focused,
        }
    }

    /// Pagination renders only alongside a non-empty success; failures and
    /// empty outcomes suppress it by clearing results and the page count.
    fn compute_pagination(&self) -> Option<PaginationInfo> {
        if !self.has_results() {
            return None;
        }
        self.total_pages.map(|total| PaginationInfo {
            current: self.page,
            total,
        })
    }

    fn compute_banner(&self) -> Option<Banner> {
        if let Some(message) = &self.error {
            return Some(Banner {
                kind: BannerKind::Error,
                message: message.clone(),
            });
        }
        self.notice.as_ref().map(|message| Banner {
            kind: BannerKind::Notice,
            message: message.clone(),
        })
    }

    fn compute_modal(&self) -> Option<ModalInfo> {
        self.selected.as_ref().map(|movie| ModalInfo {
            title: movie.title.clone(),
            year: movie
                .release_year()
                .map_or_else(|| "unknown".to_string(), |y| y.to_string()),
            rating: movie.rating_label(),
            overview: if movie.overview.is_empty() {
                "No overview available.".to_string()
            } else {
                movie.overview.clone()
            },
        })
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if matches!(self.phase, SearchPhase::Idle) {
            Some(EmptyState {
                message: "Search for movies".to_string(),
                subtitle: "Press / and type a query, then Enter".to_string(),
            })
        } else {
            None
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.selected.is_some() {
            "Esc: close details".to_string()
        } else {
            match self.input_mode {
                InputMode::Search => "Enter: search  Esc: cancel  Type your query".to_string(),
                InputMode::Normal if self.has_results() => {
                    "j/k: navigate  h/l: page  Enter: details  /: search  q: quit".to_string()
                }
                InputMode::Normal => "/: search  q: quit".to_string(),
            }
        };
        FooterInfo { keybindings }
    }

    /// Rows left for the result list after subtracting UI chrome: the blank
    /// top line, header, border, search box (3 lines), column headers, the
    /// banner/pagination area, and the bordered footer.
    const fn calculate_available_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(11)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: Some("2008-07-16".to_string()),
            vote_average: 8.5,
        }
    }

    fn state_with_movies(count: u64) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.search_query = "batman".to_string();
        state.movies = (0..count).map(|i| movie(i, &format!("movie-{i}"))).collect();
        state.total_pages = Some(3);
        state.phase = SearchPhase::Loaded;
        state
    }

    #[test]
    fn selection_wraps_both_directions() {
        let mut state = state_with_movies(3);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);

        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_a_noop_without_results() {
        let mut state = AppState::new(Theme::default());
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn pagination_requires_results() {
        let mut state = state_with_movies(2);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.pagination.map(|p| (p.current, p.total)), Some((1, 3)));

        state.clear_results();
        state.phase = SearchPhase::Failed;
        state.error = Some("boom".to_string());
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.pagination.is_none());
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn error_banner_takes_precedence_over_notice() {
        let mut state = AppState::new(Theme::default());
        state.phase = SearchPhase::Failed;
        state.error = Some("Invalid API key".to_string());
        state.notice = Some("leftover".to_string());

        let banner = state.compute_viewmodel(24, 80).banner.unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, "Invalid API key");
    }

    #[test]
    fn loading_flag_only_without_retained_rows() {
        let mut state = state_with_movies(2);
        state.phase = SearchPhase::Pending;
        assert!(!state.compute_viewmodel(24, 80).loading);

        state.clear_results();
        assert!(state.compute_viewmodel(24, 80).loading);
    }

    #[test]
    fn viewmodel_windows_long_result_lists() {
        let mut state = state_with_movies(40);
        state.selected_index = 20;

        let vm = state.compute_viewmodel(24, 80);
        let available = 24 - 11;
        assert_eq!(vm.rows.len(), available);
        assert!(vm.rows[vm.selected_index].is_selected);
    }

    #[test]
    fn modal_implied_by_selection() {
        let mut state = state_with_movies(1);
        assert!(state.compute_viewmodel(24, 80).modal.is_none());

        state.selected = state.movie_under_cursor().cloned();
        let modal = state.compute_viewmodel(24, 80).modal.unwrap();
        assert_eq!(modal.title, "movie-0");
        assert_eq!(modal.year, "2008");
        assert_eq!(modal.overview, "No overview available.");
    }
}
