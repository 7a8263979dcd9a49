//! Flight result extraction
//!
//! Enumerates candidate flight containers on a results snapshot and resolves
//! each into a [`FlightRecord`]. A container that cannot yield a price is
//! logged and skipped; the batch itself never fails.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::context::ParseContext;
use super::resolver::{self, FieldStrategy};
use super::text;
use super::PageParser;
use crate::domain::flight::FlightRecord;
use crate::infrastructure::config::{airasia, FlightResultSelectors, SelectorConfig};
use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};

/// Flight-number pattern: two-letter airline designator plus 3-4 digits.
static FLIGHT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]{2})\s*(\d{3,4})").unwrap());

/// Paragraph elements scanned for flight numbers.
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Parser for the flight result list of a search page.
pub struct FlightResultParser {
    container_selectors: Vec<Selector>,
    price_container_selectors: Vec<Selector>,
    price_value_chain: Vec<FieldStrategy>,
    currency_chain: Vec<FieldStrategy>,
    time_selectors: Vec<Selector>,
    carrier_chain: Vec<FieldStrategy>,
    duration_chain: Vec<FieldStrategy>,
}

impl FlightResultParser {
    /// Parser with the default selector configuration.
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&SelectorConfig::default().flight_results)
    }

    /// Parser with a custom selector configuration.
    pub fn with_config(selectors: &FlightResultSelectors) -> ParsingResult<Self> {
        // The price text chain ends with the price container's own text, so
        // a container with a price but no recognizable inner markup still
        // resolves.
        let mut price_value_chain = resolver::text_chain("price", &selectors.price_value)?;
        price_value_chain.push(FieldStrategy::OwnText);

        // Logo alt text takes precedence over any airline-name text.
        let mut carrier_chain =
            resolver::attr_chain("carrier", &selectors.carrier_logo, "alt")?;
        carrier_chain.extend(resolver::text_chain("carrier", &selectors.carrier_name)?);

        Ok(Self {
            container_selectors: resolver::compile_selectors(
                "flight container",
                &selectors.container,
            )?,
            price_container_selectors: resolver::compile_selectors(
                "price container",
                &selectors.price_container,
            )?,
            price_value_chain,
            currency_chain: resolver::text_chain("currency", &selectors.currency)?,
            time_selectors: resolver::compile_selectors("times", &selectors.times)?,
            carrier_chain,
            duration_chain: resolver::text_chain("duration", &selectors.duration)?,
        })
    }

    /// Extract all flight records from a snapshot, sorted ascending by price.
    pub fn extract_flights(&self, html: &Html, context: &ParseContext) -> Vec<FlightRecord> {
        self.parse_page(html, context)
    }

    fn extract_record(&self, container: ElementRef<'_>) -> ParsingResult<Option<FlightRecord>> {
        let price_container =
            resolver::select_union(container, &self.price_container_selectors)
                .into_iter()
                .next()
                .ok_or_else(|| {
                    ParsingError::required_field_missing("price container", Some("flight result"))
                })?;

        let price_text = match resolver::resolve_field(price_container, &self.price_value_chain) {
            Some(text) => text,
            None => return Ok(None),
        };
        let price = match text::parse_price(&price_text) {
            Some(price) => price,
            None => {
                debug!("unparsable price text: '{}'", price_text);
                return Ok(None);
            }
        };

        let currency = resolver::resolve_field(price_container, &self.currency_chain)
            .and_then(|label| text::parse_currency(&label))
            .unwrap_or_else(|| airasia::DEFAULT_CURRENCY.to_string());

        // First two time elements in document order are the departure and
        // arrival displays. Anything less leaves both unset.
        let times = resolver::select_union(container, &self.time_selectors);
        let (depart_time, arrive_time) = if times.len() >= 2 {
            (non_empty_text(times[0]), non_empty_text(times[1]))
        } else {
            (None, None)
        };

        let carrier = resolver::resolve_field(container, &self.carrier_chain)
            .unwrap_or_else(|| airasia::DEFAULT_CARRIER.to_string());

        let duration = resolver::resolve_field(container, &self.duration_chain);

        let price_display = format!("{} {}", currency, text::format_thousands(price));

        Ok(Some(FlightRecord {
            price,
            currency,
            depart_time,
            arrive_time,
            duration,
            carrier,
            flight_number: None,
            price_display,
        }))
    }

    /// Page-wide scan for flight numbers in airline-related paragraph text.
    ///
    /// The result page does not place flight numbers inside the journey
    /// containers, so they are collected in document order and assigned to
    /// records by index.
    fn scan_flight_numbers(&self, root: ElementRef<'_>) -> Vec<String> {
        let mut numbers = Vec::new();
        for paragraph in root.select(&PARAGRAPH) {
            let raw = paragraph.text().collect::<String>();
            let trimmed = raw.trim();
            if !trimmed.to_lowercase().contains("air") {
                continue;
            }
            if let Some(captures) = FLIGHT_NUMBER.captures(trimmed) {
                numbers.push(format!("{} {}", &captures[1], &captures[2]));
            }
        }
        numbers
    }
}

impl PageParser for FlightResultParser {
    type Output = Vec<FlightRecord>;

    fn parse_page(&self, html: &Html, context: &ParseContext) -> Vec<FlightRecord> {
        let root = html.root_element();
        let containers = resolver::select_union(root, &self.container_selectors);
        debug!(
            "found {} flight containers on {}",
            containers.len(),
            context.label()
        );

        let flight_numbers = self.scan_flight_numbers(root);
        let mut records: Vec<FlightRecord> = Vec::new();
        let mut seen = HashSet::new();

        for (index, container) in containers.into_iter().enumerate() {
            match self.extract_record(container) {
                Ok(Some(mut record)) => {
                    // The page renders some journeys twice; suppress exact
                    // repeats, but only for fully-timed records so partial
                    // results are never dropped by accident.
                    if let (Some(depart), Some(arrive)) =
                        (record.depart_time.clone(), record.arrive_time.clone())
                    {
                        if !seen.insert((record.price, depart, arrive)) {
                            debug!("duplicate journey at index {} skipped", index);
                            continue;
                        }
                    }
                    record.flight_number = flight_numbers.get(records.len()).cloned();
                    records.push(record);
                }
                Ok(None) => {
                    debug!(
                        "container {} on {} skipped: no parsable price",
                        index,
                        context.label()
                    );
                }
                Err(e) => {
                    warn!(
                        "failed to extract flight at index {} on {}: {}",
                        index,
                        context.label(),
                        e
                    );
                }
            }
        }

        // Stable: document order is preserved for equal prices.
        records.sort_by_key(|record| record.price);

        debug!(
            "extracted {} flight records from {}",
            records.len(),
            context.label()
        );
        records
    }
}

fn non_empty_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>().trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}
