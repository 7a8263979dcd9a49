//! Farewatch - structured flight-price extraction for AirAsia search pages
//!
//! This crate turns a rendered AirAsia flight-search results page into typed
//! [`FlightRecord`] values, and independently builds deep-link search URLs
//! for the same site. Page loading and navigation are external concerns: the
//! crate only queries markup handed to it through the [`DocumentSource`]
//! seam, and never mutates the page.
//!
//! The extraction side is tolerant by design. Selector chains fall back in a
//! fixed order, per-result failures are logged and skipped, and the returned
//! collection is always sorted ascending by price.

pub mod domain;
pub mod infrastructure;

// Re-export the main entry points for convenience
pub use domain::flight::{CalendarEntry, FlightRecord, cheapest};
pub use domain::search::{SearchQuery, TripType};
pub use infrastructure::document::{DocumentSource, ReadinessWaiter};
pub use infrastructure::parsing::{
    CalendarParser, FlightResultParser, PageParser, ParseContext,
};
pub use infrastructure::parsing_error::{ParsingError, ParsingResult};
pub use infrastructure::url_builder::{UrlBuildError, build_search_url};
