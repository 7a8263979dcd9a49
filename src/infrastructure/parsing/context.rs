//! Parsing context
//!
//! Labels extraction runs for diagnostics. Carries no extraction state.

/// Context information for one extraction pass.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    /// Route being searched, e.g. "BKK-CNX".
    pub route: Option<String>,

    /// Departure date of the search, display form.
    pub depart_date: Option<String>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label the run with an origin/destination pair.
    pub fn for_route(origin: &str, destination: &str) -> Self {
        Self {
            route: Some(format!("{origin}-{destination}")),
            depart_date: None,
        }
    }

    pub fn with_depart_date(mut self, date: impl Into<String>) -> Self {
        self.depart_date = Some(date.into());
        self
    }

    /// Short label for log lines.
    pub fn label(&self) -> String {
        match (&self.route, &self.depart_date) {
            (Some(route), Some(date)) => format!("{route} on {date}"),
            (Some(route), None) => route.clone(),
            _ => "unlabeled page".to_string(),
        }
    }
}
