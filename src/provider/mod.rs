//! Provider abstraction for product data sources.
//!
//! This module defines the `ProductProvider` trait that lets the UI load
//! product lists from different sources through a unified interface:
//! - `HttpProvider`: the inventory backend over HTTP
//! - `FixtureProvider`: JSON files on disk (offline mode)
//!
//! Both sources share the same body normalization in [`decode_products`].

mod fixture;
mod http;

pub use fixture::FixtureProvider;
pub use http::HttpProvider;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Category, ProductRecord};

/// Errors returned by a product fetch.
///
/// Reasons are kept as strings so the error can be cloned into UI state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure, timeout, or non-success HTTP status.
    #[error("GET {path} failed: {reason}")]
    FetchFailed { path: String, reason: String },
    /// Body is neither `null` nor an array of product objects.
    #[error("GET {path} returned a malformed body: {reason}")]
    MalformedResponse { path: String, reason: String },
}

impl FetchError {
    pub fn failed(path: impl Into<String>, reason: impl ToString) -> Self {
        FetchError::FetchFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn status(path: impl Into<String>, status: u16) -> Self {
        FetchError::FetchFailed {
            path: path.into(),
            reason: format!("HTTP status {}", status),
        }
    }

    pub fn malformed(path: impl Into<String>, reason: impl ToString) -> Self {
        FetchError::MalformedResponse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Endpoint path the failed request targeted.
    pub fn path(&self) -> &str {
        match self {
            FetchError::FetchFailed { path, .. } | FetchError::MalformedResponse { path, .. } => {
                path
            }
        }
    }
}

/// Source of product lists.
///
/// Implementations must be safe to call concurrently for different
/// categories; a call has no side effects beyond the fetch itself.
#[async_trait]
pub trait ProductProvider: Send + Sync {
    /// Loads the full product list of one category.
    async fn fetch(&self, category: Category) -> Result<Vec<ProductRecord>, FetchError>;

    /// Short human-readable description of the source (shown in the header).
    fn describe(&self) -> String;
}

/// Normalizes a response body into a product list.
///
/// An empty body, whitespace, or JSON `null` yield an empty list. Anything
/// other than an array of objects is a [`FetchError::MalformedResponse`].
pub fn decode_products(path: &str, body: &[u8]) -> Result<Vec<ProductRecord>, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice::<Option<Vec<ProductRecord>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| FetchError::malformed(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "/products/gloves/";

    #[test]
    fn null_and_empty_bodies_are_empty_lists() {
        for body in [&b"null"[..], b"", b" \n", b"[]"] {
            assert!(decode_products(PATH, body).unwrap().is_empty());
        }
    }

    #[test]
    fn array_of_objects_is_passed_through_in_order() {
        let body = br#"[{"api_id":"a"},{"api_id":"b"},{"api_id":"c"}]"#;
        let ids: Vec<String> = decode_products(PATH, body)
            .unwrap()
            .into_iter()
            .map(|p| p.api_id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn non_array_bodies_are_malformed() {
        for body in [
            &br#"{"a":1}"#[..],
            b"42",
            br#""text""#,
            b"[1,2]",
            b"[{",
        ] {
            let err = decode_products(PATH, body).unwrap_err();
            assert!(
                matches!(err, FetchError::MalformedResponse { .. }),
                "{:?} should be malformed",
                String::from_utf8_lossy(body)
            );
            assert_eq!(err.path(), PATH);
        }
    }

    #[test]
    fn status_error_mentions_code() {
        let err = FetchError::status(PATH, 503);
        assert_eq!(err.to_string(), "GET /products/gloves/ failed: HTTP status 503");
    }
}
