//! API utilities for frontend-backend communication.
//!
//! Base-URL construction plus the error type every API function returns:
//! transport failures and generic HTTP errors carry a message, a 422
//! carries the field-keyed validation map for inline display.

use contracts::shared::validation::ValidationErrors;
use gloo_net::http::Response;
use std::fmt;

/// Get the base URL for API requests.
///
/// Built from the current window location, backend listens on port 3000.
/// Empty string if no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Failure of one API call
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Field-keyed validation messages (HTTP 422)
    Validation(ValidationErrors),
    /// Transport failure or non-422 error status
    Message(String),
}

impl ApiError {
    pub fn message(text: impl Into<String>) -> Self {
        ApiError::Message(text.into())
    }

    /// The validation map, if this failure carries one
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            ApiError::Message(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => write!(f, "Validation failed: {}", errors),
            ApiError::Message(text) => write!(f, "{}", text),
        }
    }
}

/// Turn a non-ok response into an `ApiError`, reading the validation map
/// out of a 422 body.
pub async fn error_from_response(response: Response) -> ApiError {
    if response.status() == 422 {
        // 422 without a parsable body degrades to a generic message
        if let Ok(errors) = response.json::<ValidationErrors>().await {
            return ApiError::Validation(errors);
        }
    }
    ApiError::Message(format!("Request failed: {}", response.status()))
}
