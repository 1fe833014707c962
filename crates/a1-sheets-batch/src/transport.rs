//! Session and transport seams
//!
//! The builder never talks to the network itself. A [`SessionProvider`]
//! hands out an authenticated [`ServiceHandle`], and a [`Transport`] sends
//! one [`BatchRequest`] through it. [`StaticSession`] and
//! [`RecordingTransport`] are in-process implementations for tests and dry
//! runs.

use std::collections::VecDeque;

use thiserror::Error;

use crate::request::{BatchRequest, BatchResponse, OperationResult};

/// An authenticated endpoint for one service version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHandle {
    pub service: String,
    pub version: String,
    pub token: String,
}

/// Failure reported by a session provider or transport
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct TransportFailure {
    pub message: String,
    /// Replies the service produced before failing, if any
    pub partial_replies: Vec<OperationResult>,
}

impl TransportFailure {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            partial_replies: Vec::new(),
        }
    }

    pub fn with_partial_replies(mut self, replies: Vec<OperationResult>) -> Self {
        self.partial_replies = replies;
        self
    }
}

/// Provides authenticated service endpoints
pub trait SessionProvider {
    fn service_endpoint(
        &self,
        service: &str,
        version: &str,
    ) -> Result<ServiceHandle, TransportFailure>;
}

/// Sends a batch request and waits for the response
pub trait Transport {
    fn execute(
        &mut self,
        service: &ServiceHandle,
        request: &BatchRequest,
    ) -> Result<BatchResponse, TransportFailure>;
}

impl<S: SessionProvider + ?Sized> SessionProvider for &S {
    fn service_endpoint(
        &self,
        service: &str,
        version: &str,
    ) -> Result<ServiceHandle, TransportFailure> {
        (**self).service_endpoint(service, version)
    }
}

impl<S: SessionProvider + ?Sized> SessionProvider for Box<S> {
    fn service_endpoint(
        &self,
        service: &str,
        version: &str,
    ) -> Result<ServiceHandle, TransportFailure> {
        (**self).service_endpoint(service, version)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn execute(
        &mut self,
        service: &ServiceHandle,
        request: &BatchRequest,
    ) -> Result<BatchResponse, TransportFailure> {
        (**self).execute(service, request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(
        &mut self,
        service: &ServiceHandle,
        request: &BatchRequest,
    ) -> Result<BatchResponse, TransportFailure> {
        (**self).execute(service, request)
    }
}

/// Session provider holding one pre-obtained token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSession {
    token: String,
}

impl StaticSession {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl SessionProvider for StaticSession {
    fn service_endpoint(
        &self,
        service: &str,
        version: &str,
    ) -> Result<ServiceHandle, TransportFailure> {
        if self.token.is_empty() {
            return Err(TransportFailure::new(format!(
                "no credentials for {} {}",
                service, version
            )));
        }
        Ok(ServiceHandle {
            service: service.to_string(),
            version: version.to_string(),
            token: self.token.clone(),
        })
    }
}

/// Transport that records every request and replays scripted outcomes
///
/// With no scripted outcome queued, a request succeeds with one empty
/// reply per entry.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Vec<BatchRequest>,
    outcomes: VecDeque<Result<BatchResponse, TransportFailure>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next unscripted request
    pub fn push_outcome(&mut self, outcome: Result<BatchResponse, TransportFailure>) {
        self.outcomes.push_back(outcome);
    }

    /// Make the next request fail
    pub fn fail_next(&mut self, failure: TransportFailure) {
        self.push_outcome(Err(failure));
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> &[BatchRequest] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<&BatchRequest> {
        self.requests.last()
    }
}

impl Transport for RecordingTransport {
    fn execute(
        &mut self,
        service: &ServiceHandle,
        request: &BatchRequest,
    ) -> Result<BatchResponse, TransportFailure> {
        tracing::trace!(
            "Recording {} request(s) for {} {}",
            request.requests.len(),
            service.service,
            service.version
        );
        self.requests.push(request.clone());

        match self.outcomes.pop_front() {
            Some(outcome) => outcome,
            None => Ok(BatchResponse {
                spreadsheet_id: request.spreadsheet_id.clone(),
                replies: vec![OperationResult::default(); request.requests.len()],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ValueInputOption;

    fn request() -> BatchRequest {
        BatchRequest {
            spreadsheet_id: "abc".into(),
            sheet_id: 0,
            requests: Vec::new(),
            value_input_option: ValueInputOption::UserEntered,
            include_spreadsheet_in_response: false,
            response_ranges: Vec::new(),
            response_include_grid_data: false,
        }
    }

    #[test]
    fn test_static_session() {
        let handle = StaticSession::new("t0k3n")
            .service_endpoint("sheets", "v4")
            .unwrap();
        assert_eq!(handle.service, "sheets");
        assert_eq!(handle.version, "v4");
        assert_eq!(handle.token, "t0k3n");

        let err = StaticSession::new("")
            .service_endpoint("sheets", "v4")
            .unwrap_err();
        assert_eq!(err.to_string(), "no credentials for sheets v4");
    }

    #[test]
    fn test_recording_transport() {
        let handle = StaticSession::new("t").service_endpoint("sheets", "v4").unwrap();
        let mut transport = RecordingTransport::new();
        transport.fail_next(
            TransportFailure::new("quota exceeded")
                .with_partial_replies(vec![OperationResult::default()]),
        );

        let err = transport.execute(&handle, &request()).unwrap_err();
        assert_eq!(err.message, "quota exceeded");
        assert_eq!(err.partial_replies.len(), 1);

        let response = transport.execute(&handle, &request()).unwrap();
        assert_eq!(response.spreadsheet_id, "abc");
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_trait_objects() {
        let session: Box<dyn SessionProvider> = Box::new(StaticSession::new("t"));
        let mut transport: Box<dyn Transport> = Box::new(RecordingTransport::new());
        let handle = session.service_endpoint("sheets", "v4").unwrap();
        assert!(transport.execute(&handle, &request()).is_ok());
    }
}
