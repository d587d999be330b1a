//! # REST API Errors
//!
//! Error types for the REST API module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use thiserror::Error;

use super::response::Rendered;
use crate::read_service::ReadError;
use crate::revision::{ID_ATTRIBUTE, KEY_ATTRIBUTE, REV_ATTRIBUTE};

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// Error number of the router fallback.
pub const UNKNOWN_PATH: u32 = 404;
/// Error number of an unsupported method on a known path.
pub const METHOD_NOT_ALLOWED: u32 = 405;
/// Error number of a query string that cannot be decoded.
pub const BAD_PARAMETER: u32 = 10;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    /// Read path failure
    #[error("{0}")]
    Read(#[from] ReadError),

    /// No route matches
    #[error("unknown path '{0}'")]
    UnknownPath(String),

    /// Route exists but not for this method
    #[error("method not supported")]
    MethodNotAllowed,

    /// Query string rejected before reaching the read path
    #[error("bad parameter: {0}")]
    BadParameter(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Read(err) => match err {
                // 400 Bad Request
                ReadError::MalformedHandle(_) => StatusCode::BAD_REQUEST,
                ReadError::UnnamedCollection(_) => StatusCode::BAD_REQUEST,
                ReadError::CollectionParameterMissing => StatusCode::BAD_REQUEST,

                // 404 Not Found
                ReadError::CollectionNotFound(_) => StatusCode::NOT_FOUND,
                ReadError::DocumentNotFound(_) => StatusCode::NOT_FOUND,

                // 412 Precondition Failed
                ReadError::PreconditionFailed(_) => StatusCode::PRECONDITION_FAILED,

                // 500 Internal Server Error
                ReadError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            RestError::UnknownPath(_) => StatusCode::NOT_FOUND,
            RestError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RestError::BadParameter(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Stable error number reported as `errorNum`.
    pub fn error_num(&self) -> u32 {
        match self {
            RestError::Read(err) => err.error_num(),
            RestError::UnknownPath(_) => UNKNOWN_PATH,
            RestError::MethodNotAllowed => METHOD_NOT_ALLOWED,
            RestError::BadParameter(_) => BAD_PARAMETER,
        }
    }

    /// Error body. A failed precondition also reports the current state.
    pub fn body(&self) -> Value {
        let mut body = json!({
            "error": true,
            "errorNum": self.error_num(),
            "code": self.status_code().as_u16(),
            "errorMessage": self.to_string(),
        });

        if let RestError::Read(ReadError::PreconditionFailed(current)) = self {
            body[ID_ATTRIBUTE] = json!(current.handle().to_string());
            body[KEY_ATTRIBUTE] = json!(current.key().as_str());
            body[REV_ATTRIBUTE] = json!(current.revision().to_string());
        }
        body
    }

    /// Render for either GET or HEAD.
    pub fn render(&self) -> Rendered {
        let rendered = Rendered::json(self.status_code(), &self.body());
        match self {
            RestError::Read(ReadError::PreconditionFailed(current)) => {
                rendered.with_etag(&current.etag())
            }
            _ => rendered,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        self.render().into_response()
    }
}
