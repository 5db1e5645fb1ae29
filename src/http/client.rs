//! Thin HTTP client used to fetch the metadata document.
//!
//! Requests are single-shot: a page view performs one fetch and a failure is
//! surfaced to the caller instead of being retried.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client wrapping a shared reqwest `Client`.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// Non-success statuses are returned as errors carrying the
    /// `reqwest::Error`, see [`status_of`].
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response.error_for_status()?;

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        serde_json::from_str(&body).context("Failed to parse JSON response")
    }
}

/// Extracts the HTTP status from an error produced by [`HttpClient::get_json`], if any.
pub fn status_of(error: &anyhow::Error) -> Option<StatusCode> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<reqwest::Error>())
        .and_then(|e| e.status())
}
