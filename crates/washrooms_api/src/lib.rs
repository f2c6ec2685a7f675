//! Client for the Rate the Washroom REST backend.
//!
//! The backend stores listings, reviews and accounts; this crate wraps
//! its JSON endpoints and layers the proximity helpers on top, so callers
//! get ranked nearby results from a single call. The backend's URL comes
//! in through [`ApiConfig`], never from globals.

use std::{error, fmt, sync::Arc};

pub mod client;
pub mod reviews;
pub mod users;
pub mod washrooms;

pub use client::{ApiConfig, WashroomApiClient};

#[derive(Debug, Clone)]
pub enum ApiError {
    RequestError(Arc<reqwest::Error>),
    InvalidResponse {
        status_code: reqwest::StatusCode,
        url: String,
        response: Option<String>,
    },
    NotFound,
}

impl error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::RequestError(e) => write!(f, "HTTP request error: {}", e),
            ApiError::InvalidResponse {
                status_code,
                url,
                response,
            } => match response {
                Some(text) => {
                    write!(f, "Invalid response ({}) {}: {}", status_code, url, text)
                }
                None => write!(f, "Invalid response ({}) {}", status_code, url),
            },
            ApiError::NotFound => write!(f, "Not found."),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::RequestError(Arc::new(e))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Collapse the not-found case into `None` for callers that treat a
/// missing record as an ordinary outcome.
pub fn not_found_to_none<T>(result: ApiResult<T>) -> ApiResult<Option<T>> {
    if let Err(ApiError::NotFound) = result {
        Ok(None)
    } else {
        result.map(Some)
    }
}
