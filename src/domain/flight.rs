//! Flight result value objects

use serde::{Deserialize, Serialize};

/// One flight offer extracted from a results page.
///
/// A record only exists if its price parsed successfully; every other field
/// degrades to a default or `None` when the markup does not yield it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Fare amount in whole currency units, group separators stripped.
    pub price: u64,

    /// 3-letter currency code, "THB" when the page does not expose one.
    pub currency: String,

    /// Departure time exactly as displayed, e.g. "06:30".
    pub depart_time: Option<String>,

    /// Arrival time exactly as displayed.
    pub arrive_time: Option<String>,

    /// Journey duration as displayed, e.g. "1h 15m".
    pub duration: Option<String>,

    /// Operating carrier name, "AirAsia" when not resolvable.
    pub carrier: String,

    /// Flight number recovered from the page-wide scan, e.g. "FD 3437".
    pub flight_number: Option<String>,

    /// Human-readable rendering, e.g. "THB 1,590".
    pub price_display: String,
}

/// One cell of the price-calendar widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Date label exactly as displayed in the cell.
    pub date: String,

    /// Lowest fare for that date in whole currency units.
    pub price: u64,

    /// Human-readable rendering of the fare.
    pub price_display: String,
}

/// Cheapest record of a batch, by parsed price.
///
/// Extraction output is already sorted ascending, but this does not rely on
/// that: ties resolve to the earliest record.
pub fn cheapest(flights: &[FlightRecord]) -> Option<&FlightRecord> {
    flights.iter().min_by_key(|f| f.price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: u64) -> FlightRecord {
        FlightRecord {
            price,
            currency: "THB".to_string(),
            depart_time: None,
            arrive_time: None,
            duration: None,
            carrier: "AirAsia".to_string(),
            flight_number: None,
            price_display: format!("THB {}", price),
        }
    }

    #[test]
    fn cheapest_picks_minimum_price() {
        let flights = vec![record(2100), record(899), record(1590)];
        assert_eq!(cheapest(&flights).map(|f| f.price), Some(899));
    }

    #[test]
    fn cheapest_of_empty_batch_is_none() {
        assert!(cheapest(&[]).is_none());
    }

    #[test]
    fn cheapest_tie_resolves_to_earliest() {
        let mut first = record(899);
        first.depart_time = Some("06:30".to_string());
        let flights = vec![first.clone(), record(899)];
        assert_eq!(cheapest(&flights), Some(&first));
    }

    #[test]
    fn record_serializes_round_trip() {
        let original = record(3450);
        let json = serde_json::to_string(&original).unwrap();
        let back: FlightRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}
