//! # Response Formatting
//!
//! GET and HEAD share one rendered representation: HEAD reports the status,
//! headers and `Content-Length` GET would send, and drops the body.

use axum::body::Body;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE, ETAG};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::Response;
use serde::Serialize;
use serde_json::Value;

/// Content type of every body this API produces.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Enumeration response
#[derive(Debug, Clone, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<String>,
}

impl DocumentListResponse {
    pub fn new(documents: Vec<String>) -> Self {
        Self { documents }
    }
}

/// A fully rendered response, not yet bound to a request method.
#[derive(Debug, Clone)]
pub struct Rendered {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Rendered {
    /// JSON body with the API content type.
    pub fn json(status: StatusCode, value: &Value) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_else(|_| b"{}".to_vec());
        Self::with_body(status, body)
    }

    /// Serializable body with the API content type.
    pub fn serialize<T: Serialize>(status: StatusCode, value: &T) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_else(|_| b"{}".to_vec());
        Self::with_body(status, body)
    }

    /// No body (304).
    pub fn empty(status: StatusCode) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Self {
            status,
            headers,
            body: Vec::new(),
        }
    }

    fn with_body(status: StatusCode, body: Vec<u8>) -> Self {
        let mut rendered = Self::empty(status);
        rendered
            .headers
            .insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        rendered.body = body;
        rendered
    }

    /// Attach an entity tag. Tags that are not valid header values are skipped.
    pub fn with_etag(mut self, etag: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(etag) {
            self.headers.insert(ETAG, value);
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Response for GET.
    pub fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }

    /// Response for HEAD: same status and headers, empty body.
    pub fn into_head_response(self) -> Response {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
