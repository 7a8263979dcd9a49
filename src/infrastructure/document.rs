//! Document collaborator seam and readiness polling
//!
//! The page is owned and mutated by an external renderer; this crate only
//! ever reads it. [`DocumentSource`] hands out a fresh serialization on every
//! call, and nothing downstream assumes two snapshots agree - extraction
//! always re-queries.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

use crate::infrastructure::config::{ReadinessSelectors, SelectorConfig, defaults};
use crate::infrastructure::parsing::resolver::compile_selectors;
use crate::infrastructure::parsing_error::ParsingResult;

/// Read-only handle to the live page.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Current serialization of the page. Called once per poll tick and once
    /// per extraction; implementations must not cache stale markup.
    async fn html(&self) -> anyhow::Result<String>;
}

/// Polls the document until flight results are present or a timeout elapses.
///
/// Resolves exactly once: `true` as soon as at least one flight container
/// and one price element coexist, `false` when the timeout is reached. A
/// timeout is a normal outcome, not an error.
pub struct ReadinessWaiter {
    container_selectors: Vec<Selector>,
    price_selectors: Vec<Selector>,
    poll_interval: Duration,
}

impl ReadinessWaiter {
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&SelectorConfig::default().readiness)
    }

    pub fn with_config(selectors: &ReadinessSelectors) -> ParsingResult<Self> {
        Ok(Self {
            container_selectors: compile_selectors(
                "readiness flight container",
                &selectors.flight_container,
            )?,
            price_selectors: compile_selectors("readiness price", &selectors.price)?,
            poll_interval: Duration::from_millis(defaults::POLL_INTERVAL_MS),
        })
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Default wall-clock budget for [`Self::await_results`].
    pub fn default_timeout() -> Duration {
        Duration::from_millis(defaults::RESULTS_TIMEOUT_MS)
    }

    /// Poll until both element kinds are present or `timeout` elapses.
    ///
    /// A source error on one tick is logged and treated as "not ready yet";
    /// the next tick re-queries from scratch.
    pub async fn await_results<S>(&self, source: &S, timeout: Duration) -> bool
    where
        S: DocumentSource + ?Sized,
    {
        let started = Instant::now();
        let deadline = started + timeout;

        loop {
            match source.html().await {
                Ok(markup) => {
                    if self.is_ready(&Html::parse_document(&markup)) {
                        debug!("results ready after {:?}", started.elapsed());
                        return true;
                    }
                }
                Err(e) => warn!("document source unavailable: {}", e),
            }

            let now = Instant::now();
            if now >= deadline {
                debug!("results not ready within {:?}", timeout);
                return false;
            }
            sleep(self.poll_interval.min(deadline - now)).await;
        }
    }

    fn is_ready(&self, html: &Html) -> bool {
        let root = html.root_element();
        let any_match = |selectors: &[Selector]| {
            selectors
                .iter()
                .any(|selector| root.select(selector).next().is_some())
        };
        any_match(&self.container_selectors) && any_match(&self.price_selectors)
    }
}
