//! Search request identity and outbound request building.
//!
//! A [`SearchRequest`] is the unit of fetch identity: one `(query, page)`
//! pair, recreated on every submit or page change. Besides building the
//! outbound URL and headers, it round-trips through the web-request context
//! map — the tag that lets the plugin recognize its own settled results and
//! drop the ones a newer request has superseded.

use crate::domain::Result;
use std::collections::BTreeMap;
use url::Url;

/// Catalog search endpoint.
pub const SEARCH_ENDPOINT: &str = "https://api.themoviedb.org/3/search/movie";

/// Context key carrying the query of an in-flight request.
const CONTEXT_QUERY_KEY: &str = "zinema_query";

/// Context key carrying the page of an in-flight request.
const CONTEXT_PAGE_KEY: &str = "zinema_page";

/// Identity of one fetch attempt: a query string and a 1-based page number.
///
/// Two requests are the same attempt exactly when both fields are equal; the
/// app layer compares an arriving result's request against the in-flight one
/// and discards mismatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// User-submitted search text, sent raw to the provider.
    pub query: String,

    /// 1-based page number.
    pub page: u32,
}

impl SearchRequest {
    /// Creates a request for the first page of a query.
    #[must_use]
    pub fn first_page(query: impl Into<String>) -> Self {
        Self::for_page(query, 1)
    }

    /// Creates a request for a specific page of a query.
    #[must_use]
    pub fn for_page(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
        }
    }

    /// Encodes this request into a web-request context map.
    ///
    /// The context travels with the outbound call and comes back verbatim on
    /// the settled result; [`Self::from_context`] is its inverse.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_QUERY_KEY.to_string(), self.query.clone());
        context.insert(CONTEXT_PAGE_KEY.to_string(), self.page.to_string());
        context
    }

    /// Decodes a request from a settled result's context map.
    ///
    /// Returns `None` when the context does not carry this plugin's keys —
    /// the result belongs to some other web request and must be ignored.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let query = context.get(CONTEXT_QUERY_KEY)?.clone();
        let page = context.get(CONTEXT_PAGE_KEY)?.parse::<u32>().ok()?;
        Some(Self { query, page })
    }
}

/// Builds the catalog search URL for a request.
///
/// The query and page land as percent-encoded query parameters, so arbitrary
/// user text (spaces, `&`, non-ASCII) survives intact.
///
/// # Errors
///
/// Returns an error if the endpoint constant fails to parse; with the fixed
/// constant this cannot happen, but the seam propagates rather than panics.
pub fn search_url(request: &SearchRequest) -> Result<Url> {
    let mut url = Url::parse(SEARCH_ENDPOINT)?;
    url.query_pairs_mut()
        .append_pair("query", &request.query)
        .append_pair("page", &request.page.to_string());
    Ok(url)
}

/// Builds the headers for an outbound catalog request.
///
/// Attaches the static bearer credential. The token's validity is not checked
/// here; a bad or absent token surfaces as a provider-reported authorization
/// failure like any other.
#[must_use]
pub fn request_headers(token: &str) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Authorization".to_string(), format!("Bearer {token}"));
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_round_trips_request_identity() {
        let request = SearchRequest::for_page("the matrix", 3);
        let context = request.to_context();
        assert_eq!(SearchRequest::from_context(&context), Some(request));
    }

    #[test]
    fn foreign_context_is_rejected() {
        let mut context = BTreeMap::new();
        context.insert("some_other_plugin".to_string(), "value".to_string());
        assert_eq!(SearchRequest::from_context(&context), None);

        let mut half = SearchRequest::first_page("batman").to_context();
        half.remove("zinema_page");
        assert_eq!(SearchRequest::from_context(&half), None);
    }

    #[test]
    fn unparseable_page_in_context_is_rejected() {
        let mut context = SearchRequest::first_page("batman").to_context();
        context.insert("zinema_page".to_string(), "not-a-number".to_string());
        assert_eq!(SearchRequest::from_context(&context), None);
    }

    #[test]
    fn search_url_encodes_query_parameters() {
        let request = SearchRequest::for_page("batman & robin", 2);
        let url = search_url(&request).unwrap();

        assert!(url.as_str().starts_with(SEARCH_ENDPOINT));
        assert_eq!(
            url.query_pairs().find(|(k, _)| k == "query").map(|(_, v)| v.into_owned()),
            Some("batman & robin".to_string())
        );
        assert_eq!(
            url.query_pairs().find(|(k, _)| k == "page").map(|(_, v)| v.into_owned()),
            Some("2".to_string())
        );
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn page_is_clamped_to_at_least_one() {
        assert_eq!(SearchRequest::for_page("x", 0).page, 1);
    }

    #[test]
    fn headers_carry_bearer_credential() {
        let headers = request_headers("secret-token");
        assert_eq!(
            headers.get("Authorization").map(String::as_str),
            Some("Bearer secret-token")
        );
    }
}
