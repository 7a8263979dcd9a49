//! Search deep-link construction
//!
//! Pure data transform: no document access, no network. Validation failures
//! are fatal to the single call - a partially built URL is unusable, so
//! nothing is returned on error.

use thiserror::Error;
use url::form_urlencoded::Serializer;

use crate::domain::search::{SearchQuery, TripType};
use crate::infrastructure::config::airasia;
use crate::infrastructure::parsing::text::{normalize_airport_code, normalize_date};
use crate::infrastructure::parsing_error::ParsingError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlBuildError {
    #[error("invalid airport code: '{input}'")]
    InvalidAirportCode { input: String },

    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error(transparent)]
    InvalidDate(#[from] ParsingError),
}

impl UrlBuildError {
    fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }
}

/// Build the search URL for a route and date.
///
/// Origin and destination accept IATA codes or known city names; dates
/// accept `YYYY-MM-DD` or `DD/MM/YYYY`. Key order and casing reproduce the
/// site's own links for wire compatibility.
pub fn build_search_url(
    origin: &str,
    destination: &str,
    depart_date: &str,
    query: &SearchQuery,
) -> Result<String, UrlBuildError> {
    let origin_code = validate_airport(origin)?;
    let destination_code = validate_airport(destination)?;

    let depart = normalize_date(depart_date)?.ok_or_else(|| UrlBuildError::missing("departDate"))?;

    let return_date = match query.trip_type {
        TripType::Return => {
            let raw = query.return_date.as_deref().unwrap_or("");
            Some(normalize_date(raw)?.ok_or_else(|| UrlBuildError::missing("returnDate"))?)
        }
        TripType::OneWay => None,
    };

    let mut params = Serializer::new(String::new());
    params.append_pair("origin", &origin_code);
    params.append_pair("destination", &destination_code);
    params.append_pair("departDate", &depart);
    params.append_pair("tripType", query.trip_type.as_param());
    params.append_pair("adult", &query.adult.to_string());
    if query.child > 0 {
        params.append_pair("child", &query.child.to_string());
    }
    if query.infant > 0 {
        params.append_pair("infant", &query.infant.to_string());
    }
    params.append_pair("locale", airasia::LOCALE);
    params.append_pair("currency", &query.currency);
    if let Some(return_date) = &return_date {
        params.append_pair("returnDate", return_date);
    }

    Ok(format!(
        "{}{}?{}",
        airasia::BASE_URL,
        airasia::SEARCH_PATH,
        params.finish()
    ))
}

fn validate_airport(input: &str) -> Result<String, UrlBuildError> {
    let code = normalize_airport_code(input);
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code)
    } else {
        Err(UrlBuildError::InvalidAirportCode {
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_way_url_matches_site_format() {
        let url = build_search_url("BKK", "CNX", "20/02/2026", &SearchQuery::default()).unwrap();
        assert_eq!(
            url,
            "https://www.airasia.com/flights/search/?origin=BKK&destination=CNX\
             &departDate=20%2F02%2F2026&tripType=O&adult=1&locale=en-gb&currency=THB"
        );
        assert!(!url.contains("child"));
        assert!(!url.contains("infant"));
        assert!(!url.contains("returnDate"));
    }

    #[test]
    fn return_trip_without_return_date_is_missing_field() {
        let query = SearchQuery {
            trip_type: TripType::Return,
            ..SearchQuery::default()
        };
        let err = build_search_url("BKK", "CNX", "20/02/2026", &query).unwrap_err();
        assert_eq!(err, UrlBuildError::missing("returnDate"));
    }

    #[test]
    fn return_trip_appends_normalized_return_date() {
        let query = SearchQuery::new().with_return("2026-02-27");
        let url = build_search_url("BKK", "CNX", "20/02/2026", &query).unwrap();
        assert!(url.contains("tripType=R"));
        assert!(url.ends_with("returnDate=27%2F02%2F2026"));
    }

    #[test]
    fn city_names_normalize_to_codes() {
        let url =
            build_search_url("Bangkok", "Chiang Mai", "2026-02-20", &SearchQuery::default())
                .unwrap();
        assert!(url.contains("origin=BKK"));
        assert!(url.contains("destination=CNX"));
        assert!(url.contains("departDate=20%2F02%2F2026"));
    }

    #[test]
    fn unmapped_name_is_rejected_with_original_input() {
        let err =
            build_search_url("Atlantis", "CNX", "20/02/2026", &SearchQuery::default()).unwrap_err();
        assert_eq!(
            err,
            UrlBuildError::InvalidAirportCode {
                input: "Atlantis".to_string()
            }
        );
    }

    #[test]
    fn missing_depart_date_is_missing_field() {
        let err = build_search_url("BKK", "CNX", "", &SearchQuery::default()).unwrap_err();
        assert_eq!(err, UrlBuildError::missing("departDate"));
    }

    #[test]
    fn malformed_depart_date_is_format_error() {
        let err = build_search_url("BKK", "CNX", "20-02-2026-extra", &SearchQuery::default())
            .unwrap_err();
        assert!(matches!(err, UrlBuildError::InvalidDate(_)));
    }

    #[test]
    fn nonzero_child_and_infant_counts_are_included() {
        let query = SearchQuery::new().with_passengers(2, 1, 1);
        let url = build_search_url("DMK", "HKT", "20/02/2026", &query).unwrap();
        assert!(url.contains("adult=2&child=1&infant=1&locale=en-gb"));
    }

    #[test]
    fn custom_currency_is_passed_through() {
        let query = SearchQuery::new().with_currency("MYR");
        let url = build_search_url("KUL", "SIN", "20/02/2026", &query).unwrap();
        assert!(url.contains("currency=MYR"));
    }
}
