//! Transport-neutral request description
//!
//! `SchoolClient` builds an [`ApiRequest`] per endpoint and hands it to a
//! [`Transport`](crate::Transport). Keeping the request a plain value lets the
//! test transport assert on method, path, and body without a server.

use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// HTTP method used by the backend API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file attached to a multipart request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name the backend reads the file from
    pub field: String,
    pub file_name: String,
    /// MIME type, e.g. `application/pdf`
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

/// Multipart form: plain text fields plus an optional file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub file: Option<FilePart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Attach the file part
    pub fn file(mut self, part: FilePart) -> Self {
        self.file = Some(part);
        self
    }

    /// Look up a text field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Request body encoding
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

/// One call against the backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured base URL, e.g. `/AllFees/42`
    pub path: String,
    pub body: RequestBody,
    /// Explicit timeout; `None` waits for the transport to resolve
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, RequestBody::Empty)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path, RequestBody::Empty)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path, RequestBody::Json(body))
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, path, RequestBody::Json(body))
    }

    pub fn post_multipart(path: impl Into<String>, form: MultipartForm) -> Self {
        Self::new(Method::Post, path, RequestBody::Multipart(form))
    }

    /// Treat the call as failed once `timeout` has elapsed
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// JSON body, if any
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
