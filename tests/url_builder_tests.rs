//! Public-API tests for search URL construction

use farewatch::{SearchQuery, TripType, UrlBuildError, build_search_url};

#[test]
fn default_one_way_link_is_wire_compatible() {
    let url = build_search_url("BKK", "CNX", "20/02/2026", &SearchQuery::default()).unwrap();
    assert!(url.starts_with("https://www.airasia.com/flights/search/?"));
    assert!(url.contains(
        "origin=BKK&destination=CNX&departDate=20%2F02%2F2026&tripType=O&adult=1&locale=en-gb&currency=THB"
    ));
    for absent in ["child=", "infant=", "returnDate="] {
        assert!(!url.contains(absent), "unexpected key: {absent}");
    }
}

#[test]
fn round_trip_link_carries_both_dates() {
    let query = SearchQuery::new().with_return("27/02/2026");
    let url = build_search_url("Chiang Mai", "bkk", "2026-02-20", &query).unwrap();
    assert!(url.contains("origin=CNX&destination=BKK"));
    assert!(url.contains("departDate=20%2F02%2F2026"));
    assert!(url.contains("tripType=R"));
    assert!(url.contains("returnDate=27%2F02%2F2026"));
}

#[test]
fn validation_failures_name_their_cause() {
    let bad_airport =
        build_search_url("Shangri-La", "CNX", "20/02/2026", &SearchQuery::default()).unwrap_err();
    assert!(matches!(
        bad_airport,
        UrlBuildError::InvalidAirportCode { input } if input == "Shangri-La"
    ));

    let no_return = build_search_url(
        "BKK",
        "CNX",
        "20/02/2026",
        &SearchQuery {
            trip_type: TripType::Return,
            ..SearchQuery::default()
        },
    )
    .unwrap_err();
    assert!(matches!(
        no_return,
        UrlBuildError::MissingField { field } if field == "returnDate"
    ));

    let bad_date =
        build_search_url("BKK", "CNX", "someday soon", &SearchQuery::default()).unwrap_err();
    assert!(matches!(bad_date, UrlBuildError::InvalidDate(_)));
}
