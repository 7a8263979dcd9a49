//! Selector configuration and site constants
//!
//! Centralized CSS selector chains for the AirAsia results page. Chains are
//! ordered: earlier entries take precedence and later ones are fallbacks for
//! markup drift. The class names are brittle by nature (styled-component
//! hashes), which is exactly why every field carries alternatives.

use serde::{Deserialize, Serialize};

/// Complete selector configuration for one results page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub flight_results: FlightResultSelectors,
    pub price_calendar: CalendarSelectors,
    pub readiness: ReadinessSelectors,
}

/// Selector chains for the flight result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightResultSelectors {
    /// Flight container patterns - union of matches, document order.
    pub container: Vec<String>,

    /// Price block within one container.
    pub price_container: Vec<String>,

    /// Numeric price text within the price block.
    pub price_value: Vec<String>,

    /// Currency label within the price block.
    pub currency: Vec<String>,

    /// Departure/arrival time elements - first two matches in document order.
    pub times: Vec<String>,

    /// Carrier logo images, `alt` attribute holds the airline name.
    pub carrier_logo: Vec<String>,

    /// Carrier name as text, tried after the logo `alt` chain.
    pub carrier_name: Vec<String>,

    /// Journey duration label.
    pub duration: Vec<String>,
}

impl Default for FlightResultSelectors {
    fn default() -> Self {
        Self {
            container: vec![
                r#"[class*="Journey"][class*="Container"]"#.to_string(),
                r#"[class*="journey-container"]"#.to_string(),
                r#"[class*="FlightCard"]"#.to_string(),
            ],
            price_container: vec![
                r#"[class*="Price"]"#.to_string(),
                r#"[class*="price-block"]"#.to_string(),
            ],
            price_value: vec![
                r#"[class*="gBxbny"]"#.to_string(),
                r#"[class*="Amount"]"#.to_string(),
                r#"[class*="fare-value"]"#.to_string(),
            ],
            currency: vec![
                r#"[class*="Currency"]"#.to_string(),
                r#"[class*="currency"]"#.to_string(),
            ],
            times: vec![
                r#"[class*="Text"][class*="hBKgBd"]"#.to_string(),
                r#"[class*="Text"][class*="eQIcKu"]"#.to_string(),
            ],
            carrier_logo: vec![
                r#"[class*="Airline"] img"#.to_string(),
                r#"img[class*="logo"]"#.to_string(),
            ],
            carrier_name: vec![
                r#"[class*="Airline"][class*="Name"]"#.to_string(),
                r#"[class*="airline-name"]"#.to_string(),
            ],
            duration: vec![
                r#"[class*="Duration"]"#.to_string(),
                r#"[class*="duration"]"#.to_string(),
            ],
        }
    }
}

/// Selector chains for the low-fare calendar widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSelectors {
    /// One day cell of the calendar strip.
    pub cell: Vec<String>,

    /// Date label within a cell.
    pub date: Vec<String>,

    /// Fare text within a cell.
    pub price: Vec<String>,
}

impl Default for CalendarSelectors {
    fn default() -> Self {
        Self {
            cell: vec![
                r#"[class*="Calendar"][class*="Item"]"#.to_string(),
                r#"[class*="calendar-day"]"#.to_string(),
                r#"[class*="DateItem"]"#.to_string(),
            ],
            date: vec![
                r#"[class*="Date"]"#.to_string(),
                r#"[class*="date"]"#.to_string(),
                "time".to_string(),
            ],
            price: vec![
                r#"[class*="Price"]"#.to_string(),
                r#"[class*="Amount"]"#.to_string(),
            ],
        }
    }
}

/// Patterns the readiness waiter polls for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessSelectors {
    /// At least one flight container must be present.
    pub flight_container: Vec<String>,

    /// At least one price element must be present.
    pub price: Vec<String>,
}

impl Default for ReadinessSelectors {
    fn default() -> Self {
        Self {
            flight_container: vec![
                r#"[class*="Journey"][class*="Container"]"#.to_string(),
                r#"[class*="journey-container"]"#.to_string(),
                r#"[class*="FlightCard"]"#.to_string(),
            ],
            price: vec![
                r#"[class*="Price"]"#.to_string(),
                r#"[class*="price-block"]"#.to_string(),
            ],
        }
    }
}

/// AirAsia site constants
pub mod airasia {
    /// Site origin for all deep links.
    pub const BASE_URL: &str = "https://www.airasia.com";

    /// Path of the flight search page.
    pub const SEARCH_PATH: &str = "/flights/search/";

    /// Locale parameter sent with every search URL.
    pub const LOCALE: &str = "en-gb";

    /// Currency assumed when the page or caller does not specify one.
    pub const DEFAULT_CURRENCY: &str = "THB";

    /// Carrier assumed when a result does not expose an airline name.
    pub const DEFAULT_CARRIER: &str = "AirAsia";
}

/// Timing defaults
pub mod defaults {
    /// Poll interval of the readiness waiter.
    pub const POLL_INTERVAL_MS: u64 = 500;

    /// Total wall-clock budget to wait for results.
    pub const RESULTS_TIMEOUT_MS: u64 = 15_000;
}
