//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use crate::api::{Response, Transport};
use crate::error::SeedError;

/// A request as the transport saw it.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub url: String,
    pub body: Value,
    pub bearer: Option<String>,
}

/// Replays queued responses in order and records every request.
///
/// Once the queue is empty every further request gets `fallback`.
pub struct ScriptedTransport {
    queue: Mutex<VecDeque<Result<Response, SeedError>>>,
    fallback: Response,
    sent: Mutex<Vec<SentRequest>>,
}

impl ScriptedTransport {
    pub fn always(status: u16, body: &str) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: Response {
                status,
                body: body.to_string(),
            },
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn then(self, result: Result<Response, SeedError>) -> Self {
        self.queue.lock().unwrap().push_back(result);
        self
    }

    pub fn then_status(self, status: u16, body: &str) -> Self {
        self.then(Ok(Response {
            status,
            body: body.to_string(),
        }))
    }

    pub fn then_fail(self) -> Self {
        self.then(Err(SeedError::Transport("connection refused".to_string())))
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        bearer: Option<&str>,
    ) -> Result<Response, SeedError> {
        self.sent.lock().unwrap().push(SentRequest {
            url: url.to_string(),
            body: body.clone(),
            bearer: bearer.map(str::to_string),
        });

        let next = self.queue.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}
