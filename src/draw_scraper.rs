use chrono::NaiveDate;
use log::{info, warn};

use crate::errors::ScrapeError;
use crate::extract::winning_numbers;
use crate::requests::RequestClient;

/// Fetches the draw page and pulls out the winning numbers for one day.
pub struct DrawScraper<'c> {
    pub url: String,
    request_client: &'c RequestClient,
}

impl<'c> DrawScraper<'c> {
    pub fn new(url: String, request_client: &'c RequestClient) -> Self {
        Self {
            url,
            request_client,
        }
    }

    /// One fetch, one traversal. `reference` is the already clock-adjusted
    /// day to match rows against, so repeated calls within a render are
    /// deterministic.
    pub async fn scrape(&self, reference: NaiveDate) -> Result<Vec<String>, ScrapeError> {
        info!("Scraping draw results from: {}", self.url);
        let html = self
            .request_client
            .fetch_url_body(&self.url)
            .await
            .map_err(|source| ScrapeError::Network {
                url: self.url.clone(),
                source,
            })?;
        let numbers = winning_numbers(&html, reference);
        if numbers.is_empty() {
            warn!("No draw row matched the current day; winning set is empty");
        } else {
            info!("Extracted {} winning numbers", numbers.len());
        }
        Ok(numbers)
    }
}
