use std::time::Duration;

use tracing::info;

use crate::error::HeroScoutError;

use super::types::HeroRecord;

/// Public superhero dataset: one JSON array with every hero record.
pub const DEFAULT_API_URL: &str = "https://akabab.github.io/superhero-api/api/all.json";

/// HTTP client for the superhero dataset.
///
/// Thin wrapper over reqwest: one GET, a status check, and a JSON decode.
/// No retries, no caching; transport failures surface as `HeroScoutError`
/// and never reach the selection logic.
pub struct HeroApiClient {
    client: reqwest::Client,
    api_url: String,
}

impl HeroApiClient {
    /// Create a client for the default dataset URL with a 30 second timeout.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL)
    }

    /// Create a client for a custom dataset URL (used by the CLI override
    /// and by tests).
    pub fn with_url(api_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("heroscout/0.1")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            api_url: api_url.to_string(),
        }
    }

    /// The dataset URL this client fetches from.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch and decode the full hero dataset.
    pub async fn fetch_all(&self) -> Result<Vec<HeroRecord>, HeroScoutError> {
        info!("Fetching hero dataset: {}", self.api_url);
        let response = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| HeroScoutError::Request(format!("Failed to fetch '{}': {}", self.api_url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HeroScoutError::Status {
                status: status.as_u16(),
                url: self.api_url.clone(),
            });
        }

        let records: Vec<HeroRecord> = response.json().await.map_err(|e| {
            HeroScoutError::Decode(format!(
                "Failed to decode hero dataset from '{}': {}",
                self.api_url, e
            ))
        })?;

        info!("Fetched {} hero records", records.len());
        Ok(records)
    }

    /// Fetch only the HTTP status code for the dataset URL.
    /// Used by the live status-code checks; the body is discarded.
    pub async fn fetch_status(&self) -> Result<u16, HeroScoutError> {
        let response = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| HeroScoutError::Request(format!("Failed to fetch '{}': {}", self.api_url, e)))?;

        Ok(response.status().as_u16())
    }
}

impl Default for HeroApiClient {
    fn default() -> Self {
        Self::new()
    }
}
