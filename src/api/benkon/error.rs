use reqwest::StatusCode;
use serde::Deserialize;

use crate::core::date_range::DateRangeError;

/// User-facing failure of a remote call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service rejected the date range with one of the known validation messages.
    #[error(transparent)]
    Validation(#[from] DateRangeError),

    #[error("Location not found")]
    LocationNotFound,

    #[error("Data not found for the specified parameters")]
    NotFound,

    #[error("Server error. Please try again later")]
    Server,

    #[error("Request timeout. Please check your connection and try again")]
    Timeout,

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(#[source] reqwest::Error),
}

impl ApiError {
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        if status == StatusCode::BAD_REQUEST
            && let Some(error) = message.as_deref().and_then(validation_error)
        {
            Self::Validation(error)
        } else if status == StatusCode::NOT_FOUND {
            Self::NotFound
        } else if status.is_server_error() {
            Self::Server
        } else {
            Self::Rejected(message.unwrap_or_else(|| {
                format!("Request failed with status code {}", status.as_u16())
            }))
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() { Self::Timeout } else { Self::Transport(error) }
    }
}

/// Error payload of a failed request.
#[derive(Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

fn validation_error(message: &str) -> Option<DateRangeError> {
    if message.contains("Date range cannot exceed 30 days") {
        Some(DateRangeError::TooLong)
    } else if message.contains("startDate must be in format YYYY-MM-DD") {
        Some(DateRangeError::InvalidFormat)
    } else if message.contains("startDate must be less than or equal to endDate") {
        Some(DateRangeError::StartAfterEnd)
    } else {
        None
    }
}
