use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::api::{results::EventResults, wcif::Wcif, Podium};

pub const DEFAULT_BASE_URL: &str = "https://www.worldcubeassociation.org/api/v0";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    // All invalid status codes
    #[error("API error: status='{0}' url='{1}' message='{2}'")]
    Api(u16, String, String),
}

/// Read-only client for the public WCA API. No auth, no pagination; every
/// call blocks until the response arrives.
pub struct WcaClient {
    client: Client,
    base_url: String,
}

impl WcaClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host, for tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.into(),
        })
    }

    /// Enumerate the events held at a competition, in the order the WCIF
    /// payload lists them.
    pub fn list_events(&self, competition_id: &str) -> Result<Vec<String>, ApiError> {
        let url = format!(
            "{}/competitions/{competition_id}/wcif/public",
            self.base_url
        );
        let wcif: Wcif = self.get_json(&url)?;
        Ok(wcif.event_ids())
    }

    /// Fetch the top-3 WCA IDs of an event's first round, together with the
    /// competition's display name. A competition with no rounds yet yields
    /// an empty podium, not an error.
    pub fn event_podium(&self, competition_id: &str, event_id: &str) -> Result<Podium, ApiError> {
        let url = format!(
            "{}/competitions/{competition_id}/results/{event_id}",
            self.base_url
        );
        let results: EventResults = self.get_json(&url)?;
        Ok(results.podium())
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {url}");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text()?;
            return Err(ApiError::Api(status.as_u16(), url.to_string(), body));
        }

        Ok(response.json()?)
    }
}
