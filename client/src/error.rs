//! Error handling for the dashboard client
//!
//! Network failures, non-2xx statuses, and JSON decode failures all
//! collapse to one error kind at the store boundary; stores record a
//! localized message and mutating actions additionally hand the error
//! back to the caller.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of one API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network/transport failure before a response arrived
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the expected JSON
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Result type alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;
