//! Pure text parsers
//!
//! Every function here is total over arbitrary input: price parsing returns
//! `None` rather than failing, and only the date normalizer reports a hard
//! format error (for non-empty input it cannot interpret).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};

/// First run of digits with optional comma group separators.
static PRICE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").unwrap());

/// City-name to IATA code table for the routes the site serves.
///
/// Keys are lowercase; lookup is case-insensitive and trimmed. Unmapped
/// names pass through upper-cased - code validation happens in the URL
/// builder, not here.
static CITY_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bangkok", "BKK"),
        ("don mueang", "DMK"),
        ("chiang mai", "CNX"),
        ("chiang rai", "CEI"),
        ("phuket", "HKT"),
        ("krabi", "KBV"),
        ("hat yai", "HDY"),
        ("khon kaen", "KKC"),
        ("udon thani", "UTH"),
        ("ubon ratchathani", "UBP"),
        ("surat thani", "URT"),
        ("nakhon si thammarat", "NST"),
        ("kuala lumpur", "KUL"),
        ("penang", "PEN"),
        ("langkawi", "LGK"),
        ("kota kinabalu", "BKI"),
        ("johor bahru", "JHB"),
        ("singapore", "SIN"),
        ("hong kong", "HKG"),
        ("macau", "MFM"),
        ("taipei", "TPE"),
        ("hanoi", "HAN"),
        ("ho chi minh city", "SGN"),
        ("da nang", "DAD"),
        ("phnom penh", "PNH"),
        ("siem reap", "REP"),
        ("vientiane", "VTE"),
        ("yangon", "RGN"),
        ("jakarta", "CGK"),
        ("denpasar", "DPS"),
        ("bali", "DPS"),
        ("tokyo", "NRT"),
        ("osaka", "KIX"),
        ("seoul", "ICN"),
        ("shanghai", "PVG"),
        ("guangzhou", "CAN"),
        ("shenzhen", "SZX"),
    ])
});

/// Extract an integer price from display text.
///
/// Takes the first digit run, strips group separators, parses as integer.
/// `"3,450"` -> 3450, `"THB 899"` -> 899, `"no digits"` -> `None`.
pub fn parse_price(text: &str) -> Option<u64> {
    let run = PRICE_RUN.find(text)?;
    let digits: String = run
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Trimmed currency label, `None` when blank. Callers default to "THB".
pub fn parse_currency(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize an airport designator to a 3-letter code where possible.
///
/// 3-letter alphabetic input is upper-cased as-is; known city names map
/// through the table; anything else passes through upper-cased unchanged.
pub fn normalize_airport_code(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return trimmed.to_ascii_uppercase();
    }
    let key = trimmed.to_lowercase();
    match CITY_CODES.get(key.as_str()) {
        Some(code) => (*code).to_string(),
        None => trimmed.to_uppercase(),
    }
}

/// Normalize a date to `DD/MM/YYYY`.
///
/// Accepts `YYYY-MM-DD` or `DD/MM/YYYY` with numeric parts; day and month
/// are zero-padded. Blank input is `Ok(None)` ("not provided"), distinct
/// from malformed non-empty input which is a hard error.
pub fn normalize_date(input: &str) -> ParsingResult<Option<String>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (day_str, month_str, year_str) = if trimmed.contains('-') {
        let parts: Vec<&str> = trimmed.split('-').collect();
        match parts.as_slice() {
            [year, month, day] => (*day, *month, *year),
            _ => return Err(ParsingError::invalid_date(trimmed)),
        }
    } else if trimmed.contains('/') {
        let parts: Vec<&str> = trimmed.split('/').collect();
        match parts.as_slice() {
            [day, month, year] => (*day, *month, *year),
            _ => return Err(ParsingError::invalid_date(trimmed)),
        }
    } else {
        return Err(ParsingError::invalid_date(trimmed));
    };

    let day: u32 = day_str
        .parse()
        .map_err(|_| ParsingError::invalid_date(trimmed))?;
    let month: u32 = month_str
        .parse()
        .map_err(|_| ParsingError::invalid_date(trimmed))?;
    let year: u32 = year_str
        .parse()
        .map_err(|_| ParsingError::invalid_date(trimmed))?;

    Ok(Some(format!("{day:02}/{month:02}/{year}")))
}

/// Comma-grouped rendering of an amount, e.g. 3450 -> "3,450".
pub fn format_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
