//! The prediction form's state and the actions that drive it.
//!
//! Every front end mutates [`FormState`] only through [`FormAction`]s so that
//! a browser reducer and the native controller share one set of transitions.

use crate::category::{Classification, classify};
use crate::error::PredictionError;
use crate::fields::{FieldSet, RequestPayload, ValidationError};
use crate::pollutant::Pollutant;

/// A state transition of the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// A field was edited. Any text is accepted.
    UpdateField { pollutant: Pollutant, value: String },
    /// Submission was refused locally because fields were empty.
    SubmitRejected(ValidationError),
    /// A request is about to be sent.
    SubmitStarted,
    /// A request finished. `Ok(None)` is a response without a usable field.
    SubmitFinished(Result<Option<f64>, PredictionError>),
    Reset,
}

/// Fields, last prediction, and UI flags of one form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub fields: FieldSet,
    /// Last successful prediction; kept across failed submissions.
    pub prediction: Option<f64>,
    /// True while a request is in flight.
    pub loading: bool,
    /// Last failure message, empty when there is none.
    pub error: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::UpdateField { pollutant, value } => {
                self.fields.set(pollutant, value);
            }
            FormAction::SubmitRejected(err) => {
                tracing::debug!("Submission rejected, empty fields: {:?}", err.missing);
                self.error = err.to_string();
            }
            FormAction::SubmitStarted => {
                self.loading = true;
                self.error.clear();
            }
            FormAction::SubmitFinished(outcome) => {
                match outcome {
                    Ok(prediction) => self.prediction = prediction,
                    Err(err) => {
                        tracing::error!("Prediction error: {}", err);
                        self.error = err.user_message();
                    }
                }
                self.loading = false;
            }
            FormAction::Reset => {
                self.fields.clear();
                self.prediction = None;
                self.error.clear();
            }
        }
    }

    pub fn update_field(&mut self, pollutant: Pollutant, value: impl Into<String>) {
        self.apply(FormAction::UpdateField {
            pollutant,
            value: value.into(),
        });
    }

    /// Validates the fields and, when complete, marks the form as loading.
    ///
    /// On `Err` the validation message is already recorded and no request
    /// must be sent. On `Ok` the caller owns the request and must finish it
    /// with [`FormState::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<RequestPayload, ValidationError> {
        match self.fields.to_payload() {
            Ok(payload) => {
                self.apply(FormAction::SubmitStarted);
                Ok(payload)
            }
            Err(err) => {
                self.apply(FormAction::SubmitRejected(err.clone()));
                Err(err)
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: Result<Option<f64>, PredictionError>) {
        self.apply(FormAction::SubmitFinished(outcome));
    }

    pub fn reset(&mut self) {
        self.apply(FormAction::Reset);
    }

    pub fn classification(&self) -> Classification {
        classify(self.prediction)
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
