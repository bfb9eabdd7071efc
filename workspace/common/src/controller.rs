//! Sending a prediction request and driving a form through a round trip.

use async_trait::async_trait;

use crate::error::{PredictionError, TransportError};
use crate::fields::RequestPayload;
use crate::form::FormState;
use crate::pollutant::Pollutant;
use crate::response::decode_prediction;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";

/// Content type of every prediction request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON `POST` and hands back whatever the server answered.
///
/// Implementations must set `Content-Type: application/json`, must not retry,
/// and report only failures to complete the exchange as errors. Any status
/// code is a successful transport.
#[async_trait(?Send)]
pub trait PredictionTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError>;
}

/// Performs one prediction round trip.
///
/// `Ok(None)` means the service answered with JSON that carries no accepted
/// prediction field.
pub async fn request_prediction<T>(
    transport: &T,
    endpoint: &str,
    payload: &RequestPayload,
) -> Result<Option<f64>, PredictionError>
where
    T: PredictionTransport + ?Sized,
{
    let body =
        serde_json::to_string(payload).map_err(|e| PredictionError::Encode(e.to_string()))?;
    tracing::debug!("POST {} - data sent to API: {}", endpoint, body);

    let response = transport.post_json(endpoint, body).await.map_err(|e| {
        tracing::error!("POST {} - Request failed: {}", endpoint, e);
        PredictionError::from(e)
    })?;

    if !response.is_success() {
        tracing::warn!("POST {} - Non-OK response: {}", endpoint, response.status);
        return Err(PredictionError::Server {
            status: response.status,
        });
    }

    tracing::trace!("POST {} - Response received, parsing JSON", endpoint);
    let prediction = decode_prediction(&response.body)?;
    tracing::info!("POST {} - Success, prediction: {:?}", endpoint, prediction);
    Ok(prediction)
}

/// A form bound to a transport and an endpoint.
///
/// Operations run to completion on the caller's task; nothing here guards
/// against overlapping submissions.
pub struct PredictionFormController<T> {
    transport: T,
    endpoint: String,
    state: FormState,
}

impl<T: PredictionTransport> PredictionFormController<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn update_field(&mut self, pollutant: Pollutant, raw: impl Into<String>) {
        self.state.update_field(pollutant, raw);
    }

    /// Validates, sends at most one request, and records the outcome.
    ///
    /// `loading` is back to false when this returns, whichever way it ended.
    pub async fn submit(&mut self) {
        let payload = match self.state.begin_submit() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::info!("Not submitting, {} empty field(s)", err.missing.len());
                return;
            }
        };

        let outcome = request_prediction(&self.transport, &self.endpoint, &payload).await;
        self.state.finish_submit(outcome);
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AqiCategory, Classification};
    use crate::fields::INCOMPLETE_FIELDS_MESSAGE;
    use crate::testing::RecordingTransport;

    const ENDPOINT: &str = "http://predictor.test/predict";

    fn filled(transport: RecordingTransport) -> PredictionFormController<RecordingTransport> {
        let mut controller = PredictionFormController::new(transport, ENDPOINT);
        let readings = [
            "110", "150", "25", "40", "65", "20", "1.5", "12", "5", "1.2", "2.5", "0.3",
        ];
        for (pollutant, value) in Pollutant::ALL.iter().zip(readings) {
            controller.update_field(*pollutant, value);
        }
        controller
    }

    #[tokio::test]
    async fn test_empty_field_short_circuits() {
        for pollutant in Pollutant::ALL {
            let mut controller = filled(RecordingTransport::new());
            controller.update_field(pollutant, "");
            controller.submit().await;

            assert!(controller.transport().requests().is_empty());
            assert_eq!(controller.state().error, INCOMPLETE_FIELDS_MESSAGE);
            assert!(!controller.state().loading);
        }
    }

    #[tokio::test]
    async fn test_submit_sends_exactly_one_request() {
        let transport = RecordingTransport::new().respond(200, r#"{"predicted_AQI": 142.37}"#);
        let mut controller = filled(transport);
        controller.submit().await;

        let requests = controller.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, ENDPOINT);

        let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 12);
        for pollutant in Pollutant::ALL {
            assert!(object.contains_key(pollutant.key()), "missing {}", pollutant);
        }
        assert_eq!(body["PM2.5"], serde_json::json!(110.0));
        assert_eq!(body["CO"], serde_json::json!(1.5));
        assert_eq!(body["Xylene"], serde_json::json!(0.3));

        assert_eq!(controller.state().prediction, Some(142.37));
        assert_eq!(
            controller.state().classification(),
            Classification::Category(AqiCategory::UnhealthyForSensitiveGroups)
        );
        assert!(!controller.state().loading);
        assert!(!controller.state().has_error());
    }

    #[tokio::test]
    async fn test_alternate_response_fields() {
        let cases = [
            (r#"{"predicted_AQI": 42}"#, 42.0),
            (r#"{"aqi": 77}"#, 77.0),
            (r#"{"prediction": 15}"#, 15.0),
            (r#"{"predicted_AQI": 10, "aqi": 20}"#, 10.0),
        ];
        for (body, expected) in cases {
            let mut controller = filled(RecordingTransport::new().respond(200, body));
            controller.submit().await;
            assert_eq!(controller.state().prediction, Some(expected), "body {}", body);
        }
    }

    #[tokio::test]
    async fn test_server_error_keeps_previous_prediction() {
        let transport = RecordingTransport::new()
            .respond(200, r#"{"aqi": 64}"#)
            .respond(500, r#"{"error": "model not loaded"}"#);
        let mut controller = filled(transport);

        controller.submit().await;
        assert_eq!(controller.state().prediction, Some(64.0));

        controller.submit().await;
        assert_eq!(controller.state().prediction, Some(64.0));
        assert_eq!(
            controller.state().error,
            "Failed to predict AQI: API request failed: 500"
        );
        assert!(!controller.state().loading);
        assert_eq!(controller.transport().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let transport = RecordingTransport::new().fail("error sending request: connection refused");
        let mut controller = filled(transport);
        controller.submit().await;

        assert_eq!(controller.state().prediction, None);
        assert_eq!(
            controller.state().error,
            "Failed to predict AQI: error sending request: connection refused"
        );
        assert!(!controller.state().loading);
    }

    #[tokio::test]
    async fn test_invalid_json_body() {
        let transport = RecordingTransport::new().respond(200, "Internal hiccup");
        let mut controller = filled(transport);
        controller.submit().await;

        assert!(controller.state().error.starts_with("Failed to predict AQI: "));
        assert_eq!(controller.state().prediction, None);
        assert!(!controller.state().loading);
    }

    #[tokio::test]
    async fn test_non_numeric_prediction_is_unclassifiable() {
        let transport = RecordingTransport::new().respond(201, r#"{"aqi": "very high"}"#);
        let mut controller = filled(transport);
        controller.submit().await;

        assert_eq!(
            controller.state().classification(),
            Classification::Unclassifiable
        );
    }

    #[tokio::test]
    async fn test_reset_after_success() {
        let transport = RecordingTransport::new().respond(200, r#"{"predicted_AQI": 88}"#);
        let mut controller = filled(transport);
        controller.submit().await;
        controller.reset();

        let state = controller.state();
        assert!(state.fields.iter().all(|(_, v)| v.is_empty()));
        assert_eq!(state.prediction, None);
        assert!(!state.has_error());
        assert_eq!(controller.transport().requests().len(), 1);
    }

    #[test]
    fn test_success_range() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(199, "").is_success());
        assert!(!TransportResponse::new(302, "").is_success());
        assert!(!TransportResponse::new(404, "").is_success());
    }
}
