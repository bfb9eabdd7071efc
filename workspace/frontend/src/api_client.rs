use async_trait::async_trait;
use common::{
    JSON_CONTENT_TYPE, PredictionError, PredictionTransport, RequestPayload, TransportError,
    TransportResponse, request_prediction,
};
use gloo_net::http::Request;

use crate::settings;

/// Browser `fetch` transport.
pub struct FetchTransport;

#[async_trait(?Send)]
impl PredictionTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        let response = Request::post(url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(body)
            .map_err(|e| {
                log::error!("POST {} - Failed to build request: {}", url, e);
                TransportError::new(e.to_string())
            })?
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(TransportResponse::new(status, body))
    }
}

/// Post readings to the configured prediction endpoint.
pub async fn predict(payload: &RequestPayload) -> Result<Option<f64>, PredictionError> {
    let url = settings::get_settings().predict_url();
    log::debug!("Requesting prediction from {}", url);

    let result = request_prediction(&FetchTransport, &url, payload).await;
    match &result {
        Ok(prediction) => log::info!("Prediction received: {:?}", prediction),
        Err(e) => log::error!("Prediction error: {}", e),
    }
    result
}
