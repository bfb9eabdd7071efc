//! Domain types shared by the command line and the browser front end.
//!
//! The crate holds everything about an AQI prediction that does not depend on
//! how it is displayed or which HTTP stack carries it: the twelve pollutant
//! fields, the request payload, response decoding, the form state machine and
//! the AQI classification.

pub mod category;
pub mod controller;
pub mod error;
pub mod fields;
pub mod form;
pub mod pollutant;
pub mod response;

#[cfg(test)]
pub(crate) mod testing;

pub use category::{AqiCategory, CategoryStyle, Classification, NEUTRAL_STYLE, classify};
pub use controller::{
    DEFAULT_ENDPOINT, JSON_CONTENT_TYPE, PredictionFormController, PredictionTransport,
    TransportResponse, request_prediction,
};
pub use error::{PredictionError, TransportError};
pub use fields::{FieldSet, INCOMPLETE_FIELDS_MESSAGE, RequestPayload, ValidationError, parse_float};
pub use form::{FormAction, FormState};
pub use pollutant::{Pollutant, UnknownPollutant};
pub use response::{FieldExtractor, PREDICTION_EXTRACTORS, decode_prediction, extract_prediction};
