//! In-memory transports for unit tests.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::transport::{HttpClient, HttpRequest, HttpResponse};
use crate::error::TransportError;

/// Records every request and replays queued outcomes in order.
#[derive(Clone, Debug, Default)]
pub(crate) struct StubTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    outcomes: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: StatusCode, body: &str) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers: HeaderMap::new(),
            body: Bytes::from(body.to_owned()),
        }));
        self
    }

    pub(crate) fn fail(self, err: TransportError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Body of the `index`th request, parsed as JSON.
    pub(crate) fn json_body(&self, index: usize) -> serde_json::Value {
        let requests = self.requests.lock().unwrap();
        let body = requests[index].body.as_ref().expect("request had no body");
        serde_json::from_slice(body).unwrap()
    }
}

impl HttpClient for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("no stubbed response left")
    }
}

/// Never answers; used to exercise cancellation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PendingTransport;

impl HttpClient for PendingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        std::future::pending().await
    }
}
