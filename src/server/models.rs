use axum::http::StatusCode;
use serde::Serialize;

use crate::languages::SupportedLanguage;
use crate::provider::UpstreamError;

#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    pub(crate) message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LanguagesResponse {
    pub(crate) languages: &'static [SupportedLanguage],
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: String,
}

#[derive(Debug)]
pub(crate) struct ServerError {
    pub(crate) status: StatusCode,
    pub(crate) message: String,
}

impl ServerError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<UpstreamError> for ServerError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::RateLimited(_) => Self {
                status: StatusCode::TOO_MANY_REQUESTS,
                message: "API quota exceeded. Please try again later or contact support."
                    .to_string(),
            },
            UpstreamError::Unauthorized(_) => Self {
                status: StatusCode::UNAUTHORIZED,
                message: "Invalid API key or insufficient permissions. Please check your API key."
                    .to_string(),
            },
            err => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Translation failed: {}", err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ServerError, StatusCode, UpstreamError};

    #[test]
    fn rate_limit_maps_to_429() {
        let err = ServerError::from(UpstreamError::RateLimited("quota".to_string()));
        assert_eq!(err.status, StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let err = ServerError::from(UpstreamError::Unauthorized("403".to_string()));
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn other_failures_map_to_500_with_upstream_message() {
        let err = ServerError::from(UpstreamError::Upstream("boom".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Translation failed: boom");

        let err = ServerError::from(UpstreamError::Empty);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.starts_with("Translation failed:"));
    }
}
