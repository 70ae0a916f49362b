//! Scripted in-memory backend for store tests

#![allow(dead_code)]

use async_trait::async_trait;
use school_api::{ApiRequest, Failure, RequestBody, SchoolClient, Transport};
use school_desk::middleware::{ApiMiddleware, LoggingMiddleware, NotificationMiddleware};
use school_desk::{AppState, Store};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the backend answers one request
#[derive(Debug, Clone)]
pub struct Reply {
    pub delay: Duration,
    pub result: Result<Value, Failure>,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(body),
        }
    }

    pub fn err(failure: Failure) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(failure),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = dyn Fn(&ApiRequest) -> Reply + Send + Sync;

/// Transport answering from a closure, recording every request
///
/// Honors `ApiRequest::timeout` the way the HTTP transport does.
pub struct ScriptedTransport {
    responder: Box<Responder>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(responder: impl Fn(&ApiRequest) -> Reply + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Same reply for every request
    pub fn always(reply: Reply) -> Arc<Self> {
        Self::new(move |_| reply.clone())
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value, Failure> {
        let reply = (self.responder)(&request);
        let timeout = request.timeout;
        self.requests.lock().unwrap().push(request);

        let answer = async {
            tokio::time::sleep(reply.delay).await;
            reply.result
        };
        match timeout {
            Some(limit) => tokio::time::timeout(limit, answer)
                .await
                .unwrap_or(Err(Failure::Timeout)),
            None => answer.await,
        }
    }
}

/// Field of a JSON request body, if any
pub fn body_field(request: &ApiRequest, field: &str) -> Option<String> {
    match &request.body {
        RequestBody::Json(body) => body.get(field)?.as_str().map(str::to_string),
        _ => None,
    }
}

/// Store wired the way the binary wires it
pub fn store_with(transport: Arc<ScriptedTransport>) -> Store {
    store_with_client(SchoolClient::new(transport))
}

pub fn store_with_client(client: SchoolClient) -> Store {
    let mut store = Store::new(AppState::default());
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(NotificationMiddleware::new()));
    store.add_middleware(Box::new(ApiMiddleware::new(client).unwrap()));
    store
}

pub const WAIT: Duration = Duration::from_secs(5);
