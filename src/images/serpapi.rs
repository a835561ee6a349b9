use super::{fallback_images, ImageSearchService};
use crate::config::SERPAPI_PLACEHOLDER_KEY;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://serpapi.com";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    pins: Vec<Pin>,
}

#[derive(Debug, Deserialize)]
struct Pin {
    images: Option<PinImages>,
}

#[derive(Debug, Deserialize)]
struct PinImages {
    orig: Option<PinImage>,
}

#[derive(Debug, Deserialize)]
struct PinImage {
    url: Option<String>,
}

/// Image search backed by SerpAPI's Pinterest engine.
///
/// URLs come from `pins[].images.orig.url` of the first `count` pins.
pub struct SerpApiImageClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl SerpApiImageClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::new_with_client(api_key, Duration::from_secs(30), Client::new())
    }

    pub fn new_with_client(api_key: Option<String>, timeout: Duration, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn usable_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != SERPAPI_PLACEHOLDER_KEY)
    }

    async fn fetch(&self, api_key: &str, query: &str, count: usize) -> Result<Vec<String>> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!("Searching SerpAPI for {:?}", query);

        let response = self
            .client
            .get(&url)
            .query(&[("engine", "pinterest"), ("q", query), ("api_key", api_key)])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(Error::Generic(format!(
                "SerpAPI error (status {}): {}",
                status, error_text
            )));
        }

        let body: SearchResponse = response.json().await?;

        Ok(body
            .pins
            .into_iter()
            .take(count)
            .filter_map(|pin| pin.images?.orig?.url)
            .collect())
    }
}

#[async_trait]
impl ImageSearchService for SerpApiImageClient {
    async fn search_images(&self, query: &str, count: usize) -> Vec<String> {
        let Some(api_key) = self.usable_key() else {
            warn!("Image search key missing or placeholder, using fallback images");
            return fallback_images(count);
        };

        match self.fetch(api_key, query, count).await {
            Ok(images) => {
                info!("Found {} reference images for {:?}", images.len(), query);
                images
            }
            Err(e) => {
                error!("Image search failed: {}. Using fallback images", e);
                fallback_images(count)
            }
        }
    }
}
