//! Search query value objects for the URL builder

use serde::{Deserialize, Serialize};

use crate::infrastructure::config::airasia;

/// Trip direction as encoded in the search URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TripType {
    #[default]
    OneWay,
    Return,
}

impl TripType {
    /// Wire value of the `tripType` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::OneWay => "O",
            Self::Return => "R",
        }
    }
}

/// Optional parameters of a flight search, with the site's defaults.
///
/// Validated and consumed within a single `build_search_url` call; a return
/// date is required iff `trip_type` is [`TripType::Return`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub trip_type: TripType,

    /// Return leg date, any format accepted by the date normalizer.
    pub return_date: Option<String>,

    /// Adult passenger count, must be at least 1.
    pub adult: u32,

    pub child: u32,

    pub infant: u32,

    pub currency: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            trip_type: TripType::OneWay,
            return_date: None,
            adult: 1,
            child: 0,
            infant: 0,
            currency: airasia::DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the search as a return trip with the given return-leg date.
    pub fn with_return(mut self, return_date: impl Into<String>) -> Self {
        self.trip_type = TripType::Return;
        self.return_date = Some(return_date.into());
        self
    }

    pub fn with_passengers(mut self, adult: u32, child: u32, infant: u32) -> Self {
        self.adult = adult;
        self.child = child;
        self.infant = infant;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_conventions() {
        let query = SearchQuery::default();
        assert_eq!(query.trip_type, TripType::OneWay);
        assert_eq!(query.adult, 1);
        assert_eq!(query.child, 0);
        assert_eq!(query.infant, 0);
        assert_eq!(query.currency, "THB");
        assert!(query.return_date.is_none());
    }

    #[test]
    fn with_return_switches_trip_type() {
        let query = SearchQuery::new().with_return("27/02/2026");
        assert_eq!(query.trip_type, TripType::Return);
        assert_eq!(query.return_date.as_deref(), Some("27/02/2026"));
    }

    #[test]
    fn trip_type_wire_values() {
        assert_eq!(TripType::OneWay.as_param(), "O");
        assert_eq!(TripType::Return.as_param(), "R");
    }
}
