//! API error handling
//!
//! Maps application failures onto HTTP statuses, machine-readable codes, and
//! a message in the configured locale.

use application::{ApplicationError, Locale, failure_message};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// API error type
///
/// Each variant carries the user-facing message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    AddressNotFound(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    LandedInOcean(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    /// Convert an application error, rendering the message for `locale`
    pub fn from_application(err: &ApplicationError, locale: Locale) -> Self {
        let message = failure_message(err, locale);
        match err {
            ApplicationError::Validation(_) | ApplicationError::Domain(_) => {
                Self::Validation(message)
            },
            ApplicationError::NotFound(_) => Self::AddressNotFound(message),
            ApplicationError::Network(_) => Self::Network(message),
            ApplicationError::ExhaustedRetries { .. } => Self::LandedInOcean(message),
            ApplicationError::Configuration(_) => Self::Internal(message),
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AddressNotFound(_) => StatusCode::NOT_FOUND,
            Self::Network(_) => StatusCode::BAD_GATEWAY,
            Self::LandedInOcean(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::AddressNotFound(_) => "address_not_found",
            Self::Network(_) => "network_error",
            Self::LandedInOcean(_) => "landed_in_ocean",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self::from_application(&err, Locale::default())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = self.code(), message = %self, "Request failed");
        } else {
            warn!(code = self.code(), message = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use domain::DomainError;

    use super::*;

    #[test]
    fn application_errors_map_to_statuses() {
        let cases: [(ApplicationError, StatusCode, &str); 6] = [
            (
                ApplicationError::Validation("empty".to_string()),
                StatusCode::BAD_REQUEST,
                "validation_error",
            ),
            (
                DomainError::InvalidTimeBudget(0).into(),
                StatusCode::BAD_REQUEST,
                "validation_error",
            ),
            (
                ApplicationError::NotFound("x".to_string()),
                StatusCode::NOT_FOUND,
                "address_not_found",
            ),
            (
                ApplicationError::Network("x".to_string()),
                StatusCode::BAD_GATEWAY,
                "network_error",
            ),
            (
                ApplicationError::ExhaustedRetries { attempts: 16 },
                StatusCode::UNPROCESSABLE_ENTITY,
                "landed_in_ocean",
            ),
            (
                ApplicationError::Configuration("x".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
            ),
        ];

        for (err, status, code) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status(), status);
            assert_eq!(api.code(), code);
        }
    }

    #[test]
    fn message_is_localized() {
        let err = ApplicationError::ExhaustedRetries { attempts: 16 };
        let api = ApiError::from_application(&err, Locale::Ja);
        assert!(api.to_string().starts_with("海に当たってしまいました"));

        let api = ApiError::from_application(&err, Locale::En);
        assert!(api.to_string().contains("ocean"));
    }

    #[test]
    fn response_has_status() {
        let response = ApiError::Network("down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
