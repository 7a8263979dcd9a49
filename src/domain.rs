//! Domain module - value objects produced and consumed by the extraction core
//!
//! Everything here is a plain value object: constructed fresh per call,
//! immutable once returned, never persisted.

pub mod flight;
pub mod search;

pub use flight::{CalendarEntry, FlightRecord};
pub use search::{SearchQuery, TripType};
