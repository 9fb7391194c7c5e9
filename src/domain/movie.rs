//! Movie record and display helpers.
//!
//! This module defines the core `Movie` type representing one catalog entry as
//! the search endpoint reports it. Fields are deserialized verbatim from the
//! provider payload and never validated or transformed; display formatting
//! (release year, rating label) is derived on demand without mutating the record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the catalog provider for `release_date`.
const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One movie entry from the catalog search endpoint.
///
/// Attributes are read-only and sourced verbatim from the provider. Optional
/// fields default when the provider omits them; `release_date` may also arrive
/// as an empty string for unreleased or sparsely-cataloged titles, which the
/// display helpers treat the same as absent.
///
/// The poster and backdrop references are provider-relative image paths. They
/// are carried on the record untouched; a terminal pane has no use for them,
/// but they remain part of the entry's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Provider-assigned identifier.
    pub id: u64,

    /// Display title.
    pub title: String,

    /// Plot summary, possibly empty.
    #[serde(default)]
    pub overview: String,

    /// Provider-relative poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Provider-relative backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,

    /// Release date in `YYYY-MM-DD` form, possibly absent or empty.
    #[serde(default)]
    pub release_date: Option<String>,

    /// Average user rating on the provider's 0-10 scale.
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Returns the release year, if the release date is present and parseable.
    ///
    /// # Examples
    ///
    /// ```
    /// use zinema::domain::Movie;
    ///
    /// let mut movie = Movie {
    ///     id: 155,
    ///     title: "The Dark Knight".to_string(),
    ///     overview: String::new(),
    ///     poster_path: None,
    ///     backdrop_path: None,
    ///     release_date: Some("2008-07-16".to_string()),
    ///     vote_average: 8.5,
    /// };
    /// assert_eq!(movie.release_year(), Some(2008));
    ///
    /// movie.release_date = Some(String::new());
    /// assert_eq!(movie.release_year(), None);
    /// ```
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;

        let date = self.release_date.as_deref()?;
        if date.is_empty() {
            return None;
        }

        NaiveDate::parse_from_str(date, RELEASE_DATE_FORMAT)
            .ok()
            .map(|d| d.year())
    }

    /// Formats the rating for display with one decimal place (e.g. `"8.5"`).
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_with_date(release_date: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "test".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: release_date.map(str::to_string),
            vote_average: 7.25,
        }
    }

    #[test]
    fn release_year_parses_provider_date() {
        assert_eq!(movie_with_date(Some("1999-03-31")).release_year(), Some(1999));
    }

    #[test]
    fn release_year_handles_missing_and_empty_dates() {
        assert_eq!(movie_with_date(None).release_year(), None);
        assert_eq!(movie_with_date(Some("")).release_year(), None);
        assert_eq!(movie_with_date(Some("not-a-date")).release_year(), None);
    }

    #[test]
    fn rating_label_rounds_to_one_decimal() {
        assert_eq!(movie_with_date(None).rating_label(), "7.2");
    }

    #[test]
    fn deserializes_sparse_provider_payload() {
        let movie: Movie = serde_json::from_str(r#"{"id": 42, "title": "Sparse"}"#).unwrap();
        assert_eq!(movie.id, 42);
        assert_eq!(movie.title, "Sparse");
        assert!(movie.release_date.is_none());
        assert!(movie.overview.is_empty());
    }
}
