use super::ImageSearchService;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Photos requested per search; the gallery renders at most three.
const PER_PAGE: u32 = 3;

#[derive(Debug, Deserialize)]
struct SearchPhotosResponse {
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

/// Unsplash photo-search client.
pub struct UnsplashClient {
    client: Client,
    access_key: String,
    base_url: String,
    timeout: Duration,
}

impl UnsplashClient {
    pub fn new(access_key: String) -> Self {
        Self::new_with_client(access_key, Client::new())
    }

    pub fn new_with_client(access_key: String, client: Client) -> Self {
        Self {
            client,
            access_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl ImageSearchService for UnsplashClient {
    async fn search_images(&self, destination: &str) -> Result<Vec<String>> {
        tracing::debug!("Searching Unsplash photos for {}", destination);

        let url = format!("{}/search/photos", self.base_url);
        let per_page = PER_PAGE.to_string();

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&[
                ("query", destination),
                ("per_page", per_page.as_str()),
                ("orientation", "landscape"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Unsplash: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Unsplash API error (status {}): {}", status, error_text);
            return Err(Error::ImageProvider(format!(
                "Unsplash API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let search: SearchPhotosResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Unsplash response: {}\nBody: {}", e, body);
            Error::ImageProvider(format!("Failed to parse Unsplash response: {}", e))
        })?;

        if search.results.is_empty() {
            tracing::warn!("No Unsplash photos found for {}", destination);
        }

        Ok(search.results.into_iter().map(|p| p.urls.regular).collect())
    }
}
