//! Decoding of the prediction service's response body.
//!
//! Deployed services have answered under different field names over time, so
//! the prediction is looked up through an ordered list of candidate
//! extractors and the first one that finds a value wins.

use serde_json::Value;

use crate::error::PredictionError;

/// Pulls the prediction out of a response object under one field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldExtractor {
    pub field: &'static str,
}

impl FieldExtractor {
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }

    /// Returns `None` when the field is absent or `null`.
    ///
    /// A present value that is not a JSON number yields NaN so that it still
    /// shadows lower-priority fields but can never be classified.
    pub fn extract(&self, body: &Value) -> Option<f64> {
        match body.get(self.field)? {
            Value::Null => None,
            value => Some(value.as_f64().unwrap_or(f64::NAN)),
        }
    }
}

/// Accepted response fields, highest priority first.
pub const PREDICTION_EXTRACTORS: [FieldExtractor; 3] = [
    FieldExtractor::new("predicted_AQI"),
    FieldExtractor::new("aqi"),
    FieldExtractor::new("prediction"),
];

/// Extracts the prediction from an already parsed body.
pub fn extract_prediction(body: &Value) -> Option<f64> {
    PREDICTION_EXTRACTORS
        .iter()
        .find_map(|extractor| extractor.extract(body))
}

/// Parses a raw response body and extracts the prediction.
///
/// A body that is not JSON is an error. A JSON body without any accepted
/// field decodes to `Ok(None)`.
pub fn decode_prediction(body: &str) -> Result<Option<f64>, PredictionError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| PredictionError::Decode(e.to_string()))?;
    tracing::debug!("Response result: {}", value);

    let prediction = extract_prediction(&value);
    if prediction.is_none() {
        tracing::warn!(
            "Response carried none of the accepted fields ({}): {}",
            PREDICTION_EXTRACTORS
                .iter()
                .map(|e| e.field)
                .collect::<Vec<_>>()
                .join(", "),
            value
        );
    }
    Ok(prediction)
}
