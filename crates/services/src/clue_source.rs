use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info, warn};
use trivia_core::model::ClueBatch;

use crate::error::FetchError;

pub const DEFAULT_ENDPOINT: &str = "https://jservice.kenzie.academy/api/clues";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Anything that can hand out a fresh batch of clues.
#[async_trait]
pub trait ClueSource: Send + Sync {
    async fn fetch(&self) -> Result<ClueBatch, FetchError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClueSourceConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ClueSourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClueSourceConfig {
    /// Defaults overridden by `TRIVIA_API_URL` and `TRIVIA_HTTP_TIMEOUT_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = env::var("TRIVIA_API_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            config.endpoint = endpoint;
        }
        if let Some(secs) = env::var("TRIVIA_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}

/// Decode a response body of the shape `{ "clues": [...] }`.
///
/// # Errors
///
/// Returns `FetchError::Decode` when the body is not valid JSON of that shape.
pub fn decode_batch(body: &str) -> Result<ClueBatch, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetches clues with one unauthenticated GET per call.
///
/// Build once and share; the inner `Client` keeps its connection pool.
#[derive(Clone, Debug)]
pub struct HttpClueSource {
    client: Client,
    endpoint: Url,
}

impl HttpClueSource {
    /// # Errors
    ///
    /// Returns `FetchError::InvalidEndpoint` if the endpoint is not an http(s) URL.
    /// Returns `FetchError::Network` if the HTTP client cannot be built.
    pub fn new(config: &ClueSourceConfig) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|err| FetchError::InvalidEndpoint(format!("{}: {err}", config.endpoint)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(FetchError::InvalidEndpoint(config.endpoint.clone()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ClueSource for HttpClueSource {
    async fn fetch(&self) -> Result<ClueBatch, FetchError> {
        debug!(endpoint = %self.endpoint, "fetching clues");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|err| warn!(error = %err, "clue request failed"))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "clue request returned non-200 status");
            return Err(FetchError::BadStatus(status));
        }

        let body = response.text().await?;
        let batch = decode_batch(&body).inspect_err(|err| warn!(error = %err, "clue decode failed"))?;
        info!(%status, clues = batch.len(), "fetched clue batch");
        Ok(batch)
    }
}
