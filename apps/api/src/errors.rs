use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::letter::models::Action;
use crate::llm_client::LlmError;

/// Message returned when the provider signals rate limiting.
pub const RATE_LIMIT_MESSAGE: &str = "API rate limit exceeded. Please try again later.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Provider error during {action}: {source}")]
    Provider {
        action: Action,
        #[source]
        source: LlmError,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Provider { source, .. } if source.is_rate_limited() => {
                StatusCode::TOO_MANY_REQUESTS
            }
            AppError::Provider { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Provider detail never leaves the server.
    fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Provider { source, .. } if source.is_rate_limited() => {
                RATE_LIMIT_MESSAGE.to_string()
            }
            AppError::Provider { action, .. } => action.failure_message().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(source: LlmError) -> AppError {
        AppError::Provider {
            action: Action::Improve,
            source,
        }
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = AppError::Validation("Missing section".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Missing section");
    }

    #[test]
    fn test_rate_limited_is_429_with_fixed_message() {
        let err = provider(LlmError::RateLimited {
            message: "Quota exceeded for project 1234".to_string(),
        });
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.public_message(), RATE_LIMIT_MESSAGE);
    }

    #[test]
    fn test_other_provider_failure_hides_detail() {
        let err = provider(LlmError::Api {
            status: 500,
            message: "internal stack trace".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to improve text.");
    }
}
