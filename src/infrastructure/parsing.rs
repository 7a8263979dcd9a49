//! HTML parsing infrastructure
//!
//! Trait-based extraction of flight results and calendar entries from a
//! parsed page snapshot, with ordered selector-fallback chains and per-item
//! failure tolerance.

pub mod calendar_parser;
pub mod context;
pub mod flight_parser;
pub mod resolver;
pub mod text;

// Re-export public types
pub use calendar_parser::CalendarParser;
pub use context::ParseContext;
pub use flight_parser::FlightResultParser;
pub use resolver::FieldStrategy;

use scraper::Html;

/// A parser that reads one page snapshot and yields a batch of values.
///
/// Implementations never fail as a whole: unusable items are skipped and an
/// empty page yields an empty batch.
pub trait PageParser {
    type Output;

    /// Extract from a freshly parsed snapshot. The context only labels log
    /// lines; it carries no extraction state.
    fn parse_page(&self, html: &Html, context: &ParseContext) -> Self::Output;
}
