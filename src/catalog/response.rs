//! Settled-response normalization into the search outcome envelope.
//!
//! Every fetch attempt ends here: the runtime reports `(status, body)` for a
//! settled web request, and [`parse_response`] maps that pair into a
//! [`SearchOutcome`]. Exactly one variant is authoritative per attempt —
//! success carries the movie list (possibly empty) and the provider's page
//! count; failure carries a single human-readable message. Callers branch on
//! the variant, never on error types, and nothing in this module raises.
//!
//! Failure messages are chosen most-specific-first: a provider-supplied
//! `status_message` verbatim, then a generic text naming the HTTP status,
//! then a fixed fallback when no HTTP exchange happened at all.

use crate::domain::Movie;
use serde::Deserialize;

/// Fallback message when a request settles without any usable error detail.
const UNKNOWN_ERROR: &str = "Unknown error occurred.";

/// Status reported by the runtime when the request never reached the provider.
const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// The settled result of one search attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The provider answered with a result page.
    ///
    /// `movies` may legitimately be empty; an empty page is a success, not an
    /// error, and the app layer surfaces it as a notice.
    Success {
        /// Result entries in provider order.
        movies: Vec<Movie>,
        /// Total number of result pages the provider reports for the query.
        total_pages: u32,
    },

    /// The attempt failed at any level — transport, provider, or payload.
    Failure {
        /// Most specific human-readable description available.
        message: String,
    },
}

/// Success payload shape of the catalog search endpoint.
#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    results: Vec<Movie>,
    #[serde(default)]
    total_pages: u32,
}

/// Failure payload shape of the catalog search endpoint, when present.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    status_message: Option<String>,
}

/// Normalizes a settled `(status, body)` pair into a [`SearchOutcome`].
///
/// - 2xx with a well-formed payload becomes [`SearchOutcome::Success`].
/// - 2xx with a malformed payload becomes a failure carrying the
///   deserialization error text.
/// - Anything else becomes a failure via [`failure_message`].
#[must_use]
pub fn parse_response(status: u16, body: &[u8]) -> SearchOutcome {
    if (200..300).contains(&status) {
        match serde_json::from_slice::<SearchPayload>(body) {
            Ok(payload) => {
                tracing::debug!(
                    status = status,
                    result_count = payload.results.len(),
                    total_pages = payload.total_pages,
                    "catalog response parsed"
                );
                SearchOutcome::Success {
                    movies: payload.results,
                    total_pages: payload.total_pages,
                }
            }
            Err(e) => {
                tracing::debug!(status = status, error = %e, "malformed catalog payload");
                SearchOutcome::Failure {
                    message: format!("Malformed catalog response: {e}"),
                }
            }
        }
    } else {
        let message = failure_message(status, body);
        tracing::debug!(status = status, message = %message, "catalog request failed");
        SearchOutcome::Failure { message }
    }
}

/// Picks the most specific failure message available for a non-2xx result.
///
/// Preference order: provider `status_message` verbatim, then a generic text
/// naming the HTTP status, then the fixed fallback for a transport failure
/// (reported as status 0, with no provider body to mine).
fn failure_message(status: u16, body: &[u8]) -> String {
    if let Ok(payload) = serde_json::from_slice::<ErrorPayload>(body) {
        if let Some(message) = payload.status_message {
            if !message.is_empty() {
                return message;
            }
        }
    }

    if status == TRANSPORT_FAILURE_STATUS {
        UNKNOWN_ERROR.to_string()
    } else {
        format!("Catalog request failed with status {status}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_payload_maps_to_movies_and_page_count() {
        let body = br#"{
            "results": [
                {"id": 268, "title": "Batman", "release_date": "1989-06-23", "vote_average": 7.2},
                {"id": 272, "title": "Batman Begins", "release_date": "2005-06-10", "vote_average": 7.7}
            ],
            "total_pages": 3
        }"#;

        match parse_response(200, body) {
            SearchOutcome::Success { movies, total_pages } => {
                assert_eq!(movies.len(), 2);
                assert_eq!(movies[0].title, "Batman");
                assert_eq!(total_pages, 3);
            }
            SearchOutcome::Failure { message } => panic!("unexpected failure: {message}"),
        }
    }

    #[test]
    fn empty_result_page_is_a_success() {
        let body = br#"{"results": [], "total_pages": 1}"#;
        assert_eq!(
            parse_response(200, body),
            SearchOutcome::Success { movies: vec![], total_pages: 1 }
        );
    }

    #[test]
    fn provider_status_message_is_surfaced_verbatim() {
        let body = br#"{"status_message": "Invalid API key", "status_code": 7}"#;
        assert_eq!(
            parse_response(401, body),
            SearchOutcome::Failure { message: "Invalid API key".to_string() }
        );
    }

    #[test]
    fn missing_status_message_falls_back_to_status_text() {
        assert_eq!(
            parse_response(503, b""),
            SearchOutcome::Failure {
                message: "Catalog request failed with status 503".to_string()
            }
        );
    }

    #[test]
    fn transport_failure_uses_fixed_fallback() {
        assert_eq!(
            parse_response(0, b""),
            SearchOutcome::Failure { message: "Unknown error occurred.".to_string() }
        );
    }

    #[test]
    fn malformed_success_body_is_a_failure() {
        match parse_response(200, b"not json at all") {
            SearchOutcome::Failure { message } => {
                assert!(message.starts_with("Malformed catalog response:"));
            }
            SearchOutcome::Success { .. } => panic!("malformed body must not succeed"),
        }
    }
}
