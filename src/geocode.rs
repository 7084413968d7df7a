//! Address autocomplete against the public Nominatim search endpoint.
//! Suggestions only; the chosen address still goes through
//! `shorten_address` before it lands on a project.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Queries shorter than this never hit the network.
pub const MIN_QUERY_LEN: usize = 3;

/// Quiet period interactive callers should wait between keystrokes.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Deserialize)]
pub struct AddressSuggestion {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    country_codes: String,
}

impl GeocodeClient {
    pub fn new(country_codes: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            country_codes: country_codes.into(),
        }
    }

    /// Up to five candidate addresses for a partial query. Short queries
    /// return no suggestions without touching the network.
    pub async fn suggest(&self, query: &str) -> anyhow::Result<Vec<AddressSuggestion>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }
        self.http
            .get(SEARCH_URL)
            .query(&[
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", "5"),
                ("countrycodes", self.country_codes.as_str()),
                ("q", query),
            ])
            .header(
                reqwest::header::USER_AGENT,
                concat!("sitelog/", env!("CARGO_PKG_VERSION")),
            )
            .send()
            .await
            .context("address lookup request failed")?
            .error_for_status()
            .context("address lookup rejected")?
            .json::<Vec<AddressSuggestion>>()
            .await
            .context("invalid address lookup response")
    }
}

/// Coalesces bursts of calls: `wait` resolves `true` only for the most
/// recent caller once the quiet period has passed.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn wait(&self) -> bool {
        let mine = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        self.generation.load(Ordering::SeqCst) == mine
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE)
    }
}
