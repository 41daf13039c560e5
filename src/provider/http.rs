//! HTTP provider - loads product lists from the inventory backend.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::{FetchError, ProductProvider, decode_products};
use crate::model::{Category, ProductRecord};

/// Fetches categories with a single GET per call against `base_url`.
///
/// Endpoint paths are resolved relative to the base URL, so a base of
/// `http://host/api/` maps gloves to `http://host/api/products/gloves/`.
/// gzip-encoded responses are decoded transparently.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: Url,
}

impl HttpProvider {
    /// Creates a provider. `base_url` should end with `/`
    /// (see [`crate::config::normalize_base_url`]).
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| FetchError::failed(base_url.as_str(), e))?;
        Ok(Self { client, base_url })
    }

    /// Absolute URL of a category endpoint.
    pub fn endpoint(&self, category: Category) -> Result<Url, FetchError> {
        let relative = category.endpoint_path().trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_err(|e| FetchError::failed(category.endpoint_path(), e))
    }
}

#[async_trait]
impl ProductProvider for HttpProvider {
    async fn fetch(&self, category: Category) -> Result<Vec<ProductRecord>, FetchError> {
        let path = category.endpoint_path();
        let url = self.endpoint(category)?;
        let t0 = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::failed(path, transport_reason(&e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "product request rejected");
            return Err(FetchError::status(path, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::failed(path, transport_reason(&e)))?;
        let products = decode_products(path, &body)?;

        debug!(
            %url,
            bytes = body.len(),
            products = products.len(),
            duration_ms = t0.elapsed().as_millis() as u64,
            "products fetched"
        );
        Ok(products)
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

/// Failure text naming the underlying cause. reqwest's own message only
/// says which request failed.
fn transport_reason(e: &reqwest::Error) -> String {
    let kind = if e.is_timeout() {
        "timed out"
    } else if e.is_connect() {
        "connection failed"
    } else if e.is_body() || e.is_decode() {
        "reading body failed"
    } else {
        "request failed"
    };
    let mut reason = kind.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    reason
}
