use std::sync::{Arc, Mutex};

use super::{BoxError, BoxFuture, HttpTransport};
use crate::domain::ProviderResponse;
use crate::transport::RequestEnvelope;

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<RequestEnvelope>,
    outcome: Result<ProviderResponse, String>,
}

impl FakeTransport {
    pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
        Self::with_outcome(Ok(ProviderResponse {
            status,
            body: body.into(),
        }))
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self::with_outcome(Err(message.into()))
    }

    fn with_outcome(outcome: Result<ProviderResponse, String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                outcome,
            })),
        }
    }

    pub(crate) fn requests(&self) -> Vec<RequestEnvelope> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(crate) fn last_request(&self) -> RequestEnvelope {
        self.requests()
            .pop()
            .expect("transport should have received a request")
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: &'a RequestEnvelope,
    ) -> BoxFuture<'a, Result<ProviderResponse, BoxError>> {
        Box::pin(async move {
            let outcome = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request.clone());
                state.outcome.clone()
            };
            outcome.map_err(BoxError::from)
        })
    }
}
