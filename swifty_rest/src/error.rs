use thiserror::Error;

use crate::types::error_types::Error as ApiError;

pub type Result<T> = std::result::Result<T, RestError>;

/// A unified error type for this library.
#[derive(Debug, Error)]
pub enum RestError {
    /// HTTP request failed (network or protocol issue).
    #[error("Reqwest Error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// The service answered with a non-2xx status and a parseable error body.
    #[error("API Error {}: {}", .0.status, .0.message)]
    ApiError(ApiError),

    /// Non-2xx status whose body was not a service error.
    #[error("Non-success HTTP status {code}, body: {body}")]
    HttpStatus {
        code: u16,
        body: String,
    },

    /// Serde (de)serialization error.
    #[error("Serde JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RestError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        RestError::ConfigError(msg.into())
    }

    /// HTTP status behind this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::ApiError(err) => Some(err.status),
            RestError::HttpStatus { code, .. } => Some(*code),
            RestError::ReqwestError(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Convert a service error body into a `RestError::ApiError`.
pub fn handle_api_error(err: ApiError) -> RestError {
    RestError::ApiError(err)
}
