//! Price calendar extraction
//!
//! The low-fare calendar strip is a sibling widget of the result list: one
//! cell per date with the lowest fare for that day. Cells missing either the
//! date or a parsable price are skipped. Entries keep document order, which
//! is the calendar's own date order.

use scraper::{Html, Selector};
use tracing::debug;

use super::context::ParseContext;
use super::resolver::{self, FieldStrategy};
use super::text;
use super::PageParser;
use crate::domain::flight::CalendarEntry;
use crate::infrastructure::config::{airasia, CalendarSelectors, SelectorConfig};
use crate::infrastructure::parsing_error::ParsingResult;

/// Parser for the low-fare calendar widget.
pub struct CalendarParser {
    cell_selectors: Vec<Selector>,
    date_chain: Vec<FieldStrategy>,
    price_chain: Vec<FieldStrategy>,
}

impl CalendarParser {
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&SelectorConfig::default().price_calendar)
    }

    pub fn with_config(selectors: &CalendarSelectors) -> ParsingResult<Self> {
        let mut price_chain = resolver::text_chain("calendar price", &selectors.price)?;
        price_chain.push(FieldStrategy::OwnText);

        Ok(Self {
            cell_selectors: resolver::compile_selectors("calendar cell", &selectors.cell)?,
            date_chain: resolver::text_chain("calendar date", &selectors.date)?,
            price_chain,
        })
    }

    /// Extract all calendar entries from a snapshot, in document order.
    pub fn extract_calendar(&self, html: &Html, context: &ParseContext) -> Vec<CalendarEntry> {
        self.parse_page(html, context)
    }
}

impl PageParser for CalendarParser {
    type Output = Vec<CalendarEntry>;

    fn parse_page(&self, html: &Html, context: &ParseContext) -> Vec<CalendarEntry> {
        let root = html.root_element();
        let cells = resolver::select_union(root, &self.cell_selectors);
        debug!("found {} calendar cells on {}", cells.len(), context.label());

        let mut entries = Vec::new();
        for (index, cell) in cells.into_iter().enumerate() {
            let Some(date) = resolver::resolve_field(cell, &self.date_chain) else {
                debug!("calendar cell {} skipped: no date label", index);
                continue;
            };
            let price = resolver::resolve_field(cell, &self.price_chain)
                .and_then(|label| text::parse_price(&label));
            let Some(price) = price else {
                debug!("calendar cell {} ({}) skipped: no parsable price", index, date);
                continue;
            };

            entries.push(CalendarEntry {
                date,
                price,
                price_display: format!(
                    "{} {}",
                    airasia::DEFAULT_CURRENCY,
                    text::format_thousands(price)
                ),
            });
        }

        debug!(
            "extracted {} calendar entries from {}",
            entries.len(),
            context.label()
        );
        entries
    }
}
