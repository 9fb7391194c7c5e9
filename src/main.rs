//! Zellij plugin wrapper and entry point.
//!
//! The thin integration layer between the Zinema library and the Zellij
//! plugin system. It implements the `ZellijPlugin` trait, maps Zellij events
//! into library events, and executes the actions the library returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, and
//!    `PermissionRequestResult` events
//! 3. **Update**: Translate events, delegate to the library layer, execute
//!    resulting actions
//! 4. **Render**: Call the library render function
//!
//! # Fetch round-trip
//!
//! A `Fetch` action becomes a `web_request` call with the `(query, page)`
//! key serialized into the request context. The matching `WebRequestResult`
//! event carries that context back; the shim re-parses the key, normalizes
//! the `(status, body)` pair through the catalog layer, and feeds the
//! settled outcome into `handle_event`, which drops it if a newer key has
//! taken over in the meantime. Results whose context does not carry this
//! plugin's keys are ignored entirely.
//!
//! # Keybindings
//!
//! Browsing results:
//! - `j`/`Down`, `k`/`Up`: move the cursor (also `Ctrl+n`/`Ctrl+p`)
//! - `h`/`Left`, `l`/`Right`: previous/next result page
//! - `Enter`: open details for the highlighted title
//! - `/`: focus the search box
//! - `q`: close the pane
//!
//! In the search box:
//! - printable keys: edit the draft query
//! - `Enter`: submit the search
//! - `Esc`: cancel without submitting
//!
//! With the detail view open:
//! - `Esc`/`Enter`/`q`: close it

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::web_request;

use zinema::catalog::{self, SearchRequest};
use zinema::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the shim-level concerns: the resolved
/// bearer credential used for outbound catalog requests.
struct State {
    /// Core application state from the library layer.
    app: zinema::app::AppState,

    /// Bearer credential attached to every catalog request.
    api_token: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zinema::initialize(&Config::default()),
            api_token: String::new(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing, requests the `WebAccess`
    /// permission needed for catalog requests, and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zinema::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        self.app = zinema::initialize(&config);
        self.api_token = config.resolved_token();

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let span = tracing::debug_span!("plugin_update", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("web access granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("web access denied, searches will fail");
                    }
                }
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        zinema::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events, honoring the current
    /// input mode and the open detail view.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if self.app.selected.is_some() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseDetail),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Search => match key.bare_key {
                BareKey::Enter => Some(Event::SubmitSearch),
                BareKey::Esc => Some(Event::ExitSearch),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
                BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
                BareKey::Left | BareKey::Char('h') => self.prev_page_event(),
                BareKey::Right | BareKey::Char('l') => self.next_page_event(),
                BareKey::Enter => Some(Event::SelectMovie),
                BareKey::Char('/') => Some(Event::SearchMode),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            },
        }
    }

    /// Zero-based index of the previous page, if the pagination control is
    /// visible and there is one.
    fn prev_page_event(&self) -> Option<Event> {
        if self.app.has_results() && self.app.page > 1 {
            Some(Event::PageSelected(self.app.page as usize - 2))
        } else {
            None
        }
    }

    /// Zero-based index of the next page, if the pagination control is
    /// visible and there is one.
    fn next_page_event(&self) -> Option<Event> {
        if !self.app.has_results() {
            return None;
        }
        let total = self.app.total_pages?;
        if self.app.page < total {
            Some(Event::PageSelected(self.app.page as usize))
        } else {
            None
        }
    }

    /// Maps a settled web request back to an application event.
    ///
    /// Returns `None` when the result's context does not carry this plugin's
    /// request key, i.e. the result belongs to someone else.
    fn map_web_request_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let request = SearchRequest::from_context(context)?;
        tracing::debug!(
            status = status,
            query = %request.query,
            page = request.page,
            "catalog request settled"
        );
        let outcome = catalog::parse_response(status, body);
        Some(Event::FetchSettled { request, outcome })
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => self.issue_fetch(request),
        }
    }

    /// Issues the outbound catalog request for one `(query, page)` key.
    ///
    /// The request context carries the key so the settled result can be
    /// re-associated; the call itself never blocks the event loop.
    fn issue_fetch(&self, request: &SearchRequest) {
        match catalog::search_url(request) {
            Ok(url) => {
                tracing::debug!(url = %url, page = request.page, "issuing catalog request");
                web_request(
                    url.as_str(),
                    HttpVerb::Get,
                    catalog::request_headers(&self.api_token),
                    vec![],
                    request.to_context(),
                );
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to build catalog url");
            }
        }
    }
}
