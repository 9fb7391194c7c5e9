//! Catalog query service: request building and response normalization.
//!
//! This module is the plugin's boundary with the external movie catalog. It
//! has two pure halves, split by the shape of the Zellij web-request API:
//!
//! 1. **Request building** ([`request`]): a [`SearchRequest`] identifies one
//!    fetch attempt as a `(query, page)` pair. It builds the endpoint URL with
//!    percent-encoded parameters, the bearer-credential headers, and the
//!    request context that tags the outbound call with its own key so the
//!    settled result can be re-associated (and stale results discarded).
//!
//! 2. **Response normalization** ([`response`]): once the runtime reports a
//!    settled `(status, body)` pair, [`parse_response`] maps it into a
//!    [`SearchOutcome`] — movies and a page count on success, a single
//!    human-readable message on any failure. Transport failures, provider
//!    error payloads, and malformed bodies all land in the same error
//!    channel; nothing here ever raises.
//!
//! The app layer only ever sees [`SearchRequest`] and [`SearchOutcome`]; the
//! HTTP shape of the provider does not leak past this module.

pub mod request;
pub mod response;

pub use request::{request_headers, search_url, SearchRequest, SEARCH_ENDPOINT};
pub use response::{parse_response, SearchOutcome};
