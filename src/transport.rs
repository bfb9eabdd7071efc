use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use common::{JSON_CONTENT_TYPE, PredictionTransport, TransportError, TransportResponse};
use reqwest::header::CONTENT_TYPE;

/// Native transport backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            tracing::debug!("Request timeout: {:?}", timeout);
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait(?Send)]
impl PredictionTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response body: {}", e)))?;

        tracing::trace!("POST {} - {} ({} bytes)", url, status, body.len());
        Ok(TransportResponse::new(status, body))
    }
}
