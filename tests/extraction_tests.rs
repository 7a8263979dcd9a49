//! End-to-end extraction tests over a realistic results-page snapshot

use scraper::Html;

use farewatch::{
    CalendarParser, DocumentSource, FlightResultParser, ParseContext, ReadinessWaiter, cheapest,
};

/// Trimmed-down rendering of a search results page: three journeys (one with
/// an unparsable fare), a low-fare calendar strip and unrelated chrome.
const RESULTS_PAGE: &str = r#"<html><body>
  <header class="SiteHeader"><p>Book low fares with AirAsia</p></header>

  <p>Flight operated by Thai AirAsia FD 3437</p>
  <p>Flight operated by Thai AirAsia FD 3441</p>

  <div class="JourneyContainer-ab12">
    <span class="Text hBKgBd">06:30</span>
    <span class="Text eQIcKu">07:45</span>
    <span class="DurationBadge">1h 15m</span>
    <div class="AirlineRow"><img class="brand" alt="Thai AirAsia" src="logo.png"></div>
    <div class="PriceTag">
      <span class="CurrencyUnit">THB</span>
      <span class="gBxbny">1,590</span>
    </div>
  </div>

  <div class="JourneyContainer-cd34">
    <span class="Text hBKgBd">10:05</span>
    <span class="Text eQIcKu">11:20</span>
    <div class="PriceTag"><span class="gBxbny">Sold out</span></div>
  </div>

  <div class="JourneyContainer-ef56">
    <span class="Text hBKgBd">18:40</span>
    <span class="Text eQIcKu">19:55</span>
    <div class="PriceTag">
      <span class="CurrencyUnit">THB</span>
      <span class="gBxbny">899</span>
    </div>
  </div>

  <div class="LowFareCalendarItem-x1">
    <span class="DateCell">Fri 20 Feb</span>
    <span class="PriceCell">899</span>
  </div>
  <div class="LowFareCalendarItem-x2">
    <span class="DateCell">Sat 21 Feb</span>
    <span class="PriceCell">1,290</span>
  </div>

  <footer class="SiteFooter"><p>Terms and conditions</p></footer>
</body></html>"#;

#[test]
fn full_page_extraction_is_sorted_and_tolerant() {
    let parser = FlightResultParser::new().unwrap();
    let context = ParseContext::for_route("BKK", "CNX").with_depart_date("20/02/2026");
    let records = parser.extract_flights(&Html::parse_document(RESULTS_PAGE), &context);

    // The sold-out journey is dropped; the rest come back cheapest-first.
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].price, 899);
    assert_eq!(records[1].price, 1590);
    assert_eq!(records[0].depart_time.as_deref(), Some("18:40"));
    assert_eq!(records[0].arrive_time.as_deref(), Some("19:55"));
    assert_eq!(records[1].carrier, "Thai AirAsia");
    assert_eq!(records[1].duration.as_deref(), Some("1h 15m"));
    assert_eq!(records[1].price_display, "THB 1,590");

    // Flight numbers were assigned in document order, before sorting.
    assert_eq!(records[1].flight_number.as_deref(), Some("FD 3437"));
    assert_eq!(records[0].flight_number.as_deref(), Some("FD 3441"));

    assert_eq!(cheapest(&records).map(|f| f.price), Some(899));
}

#[test]
fn calendar_extraction_from_the_same_page() {
    let parser = CalendarParser::new().unwrap();
    let entries = parser.extract_calendar(&Html::parse_document(RESULTS_PAGE), &ParseContext::new());

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, "Fri 20 Feb");
    assert_eq!(entries[0].price, 899);
    assert_eq!(entries[1].price_display, "THB 1,290");
}

#[test]
fn records_serialize_for_downstream_consumers() {
    let parser = FlightResultParser::new().unwrap();
    let records =
        parser.extract_flights(&Html::parse_document(RESULTS_PAGE), &ParseContext::new());
    let json = serde_json::to_value(&records).unwrap();

    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["price"], 899);
    assert_eq!(json[0]["price_display"], "THB 899");
}

struct StaticSource(&'static str);

#[async_trait::async_trait]
impl DocumentSource for StaticSource {
    async fn html(&self) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

#[tokio::test(start_paused = true)]
async fn waiter_and_extractor_agree_on_the_same_markup() {
    let waiter = ReadinessWaiter::new().unwrap();
    let source = StaticSource(RESULTS_PAGE);
    assert!(
        waiter
            .await_results(&source, ReadinessWaiter::default_timeout())
            .await
    );

    let snapshot = Html::parse_document(&source.html().await.unwrap());
    let parser = FlightResultParser::new().unwrap();
    assert!(!parser.extract_flights(&snapshot, &ParseContext::new()).is_empty());
}

#[tokio::test(start_paused = true)]
async fn waiter_times_out_on_a_page_without_results() {
    let waiter = ReadinessWaiter::new().unwrap();
    let source = StaticSource("<html><body><p>searching...</p></body></html>");
    assert!(
        !waiter
            .await_results(&source, std::time::Duration::from_secs(3))
            .await
    );
}
