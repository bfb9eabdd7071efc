//! In-memory transport for exercising the controller without a network.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::controller::{PredictionTransport, TransportResponse};
use crate::error::TransportError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: String,
}

/// Replays scripted outcomes in order and records every request it sees.
#[derive(Default)]
pub struct RecordingTransport {
    outcomes: RefCell<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.outcomes
            .borrow_mut()
            .push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.outcomes
            .borrow_mut()
            .push_back(Err(TransportError::new(message)));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PredictionTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            body,
        });
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response")))
    }
}
