//! Catalog REST API client.
//!
//! Implements [`RangeFetcher`] over `GET {api_url}{products_path}` with
//! `minPrice`/`maxPrice` query parameters. Absent bounds are not sent.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use super::dto::ProductsResponse;
use super::settings::CatalogConfig;
use crate::domain::{Page, PriceFilter};
use crate::error::{FetchError, Result};
use crate::port::RangeFetcher;

/// HTTP client for a page-capped catalog API.
pub struct CatalogClient {
    http: HttpClient,
    products_url: Url,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl CatalogClient {
    /// Create a client for the given products endpoint with default HTTP settings.
    #[must_use]
    pub fn new(products_url: Url) -> Self {
        Self {
            http: HttpClient::new(),
            products_url,
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let products_url = config.products_url().map_err(FetchError::Url)?;
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            products_url,
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        })
    }

    /// Request URL for `filter`.
    #[must_use]
    pub fn request_url(&self, filter: PriceFilter) -> Url {
        let mut url = self.products_url.clone();
        if filter.is_bounded() {
            let mut query = url.query_pairs_mut();
            if let Some(min) = filter.min {
                query.append_pair("minPrice", &min.normalize().to_string());
            }
            if let Some(max) = filter.max {
                query.append_pair("maxPrice", &max.normalize().to_string());
            }
        }
        url
    }

    async fn send_with_retry(&self, url: &Url) -> Result<reqwest::Response> {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            match self.http.get(url.clone()).send().await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    warn!(
                        attempt,
                        max_attempts,
                        error = %err,
                        "Catalog request failed, retrying"
                    );
                    if self.retry_backoff_ms > 0 {
                        sleep(Duration::from_millis(self.retry_backoff_ms)).await;
                    }
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }
}

#[async_trait]
impl RangeFetcher for CatalogClient {
    async fn fetch_page(&self, filter: PriceFilter) -> Result<Page> {
        let url = self.request_url(filter);
        debug!(url = %url, "Fetching catalog page");

        let response = self.send_with_retry(&url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            }
            .into());
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(FetchError::EmptyPayload {
                url: url.to_string(),
            }
            .into());
        }

        let parsed: Option<ProductsResponse> =
            serde_json::from_slice(&body).map_err(FetchError::Decode)?;
        let Some(parsed) = parsed else {
            return Err(FetchError::EmptyPayload {
                url: url.to_string(),
            }
            .into());
        };

        let page = Page::try_from(parsed)?;
        debug!(
            filter = %filter,
            total = page.total,
            count = page.count,
            "Fetched catalog page"
        );
        Ok(page)
    }

    fn source_name(&self) -> &'static str {
        "catalog-api"
    }
}
