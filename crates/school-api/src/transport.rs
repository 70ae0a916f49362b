//! Transport trait and the reqwest-backed implementation
//!
//! A transport performs exactly one network call and normalizes its outcome:
//! a parsed JSON body on success, a [`Failure`] otherwise. It never retries.

use crate::error::{normalize_error_message, Failure, NETWORK_ERROR_MESSAGE};
use crate::request::{ApiRequest, Method, MultipartForm, RequestBody};
use async_trait::async_trait;
use log::debug;
use serde_json::Value;

/// Performs a single backend call
///
/// Implementations must be `Send + Sync` so one transport can be shared by
/// every in-flight request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request
    ///
    /// Returns the parsed body (`Value::Null` for an empty body) for any
    /// success status.
    async fn execute(&self, request: ApiRequest) -> Result<Value, Failure>;
}

/// Transport that talks to the backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    /// Create a transport for `base_url`
    ///
    /// The token, if given, is sent as a bearer token on every request.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        user_agent: &str,
    ) -> Result<Self, Failure> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Failure::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Absolute URL for a request path
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value, Failure> {
        let url = self.url(&request.path);
        let has_timeout = request.timeout.is_some();
        debug!("{} {}", request.method, url);

        let mut builder = self.http.request(Self::method(request.method), &url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(form) => builder.multipart(multipart_form(form)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| request_failure(&e, has_timeout))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| request_failure(&e, has_timeout))?;
        let body = parse_body(&text);

        if status.is_success() {
            debug!("{} {} -> {}", request.method, url, status.as_u16());
            return Ok(body.unwrap_or(Value::Null));
        }

        let transport_message = format!("Request failed with status code {}", status.as_u16());
        Err(Failure::Transport(normalize_error_message(
            body.as_ref(),
            Some(&transport_message),
        )))
    }
}

/// Parse a response body; empty or non-JSON bodies yield `None`
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

/// Map a reqwest error onto the failure taxonomy
fn request_failure(error: &reqwest::Error, has_timeout: bool) -> Failure {
    if has_timeout && error.is_timeout() {
        return Failure::Timeout;
    }
    if error.is_connect() {
        return Failure::Transport(NETWORK_ERROR_MESSAGE.to_string());
    }
    Failure::Transport(normalize_error_message(None, Some(&error.to_string())))
}

fn multipart_form(form: MultipartForm) -> Result<reqwest::multipart::Form, Failure> {
    let mut multipart = reqwest::multipart::Form::new();
    for (name, value) in form.fields {
        multipart = multipart.text(name, value);
    }
    if let Some(file) = form.file {
        let mut part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(mime) = file.mime {
            part = part
                .mime_str(&mime)
                .map_err(|e| Failure::Transport(format!("Invalid MIME type {}: {}", mime, e)))?;
        }
        multipart = multipart.part(file.field, part);
    }
    Ok(multipart)
}
