use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// A required setting (usually an API key) is missing.
    Config(String),
    Http(reqwest::Error),
    /// The upstream answered with a non-success status.
    Upstream { status: u16, message: String },
    NotFound(String),
    BadRequest(String),
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ApiError::Http(err) => write!(f, "HTTP error: {}", err),
            ApiError::Upstream { status, message } => {
                write!(f, "Upstream error ({}): {}", status, message)
            }
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::Parse(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Http(_) | ApiError::Upstream { .. } | ApiError::Parse(_) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Internal details stay in the logs.
        let message = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Config(_) => "Service is not configured".to_string(),
            _ => "Upstream service unavailable".to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
