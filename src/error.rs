use std::time::Duration;

use actix_multipart::MultipartError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::models::reply::ErrorBody;

pub type ProxyResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date of birth: {0:?}")]
    InvalidDate(String),

    #[error("{0}")]
    Backend(String),

    #[error("backend request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Form(#[from] MultipartError),

    #[error("form field exceeds {0} bytes")]
    FieldTooLarge(usize),

    #[error("form exceeds {0} bytes")]
    FormTooLarge(usize),

    #[error("Failed to process your request. Please try again.")]
    Compatibility,
}

impl AppError {
    /// Message shown to the browser, never empty.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            AppError::FieldTooLarge(_) | AppError::FormTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        let err = AppError::MissingField("city");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Missing required field: city");
    }

    #[test]
    fn backend_errors_collapse_to_500() {
        let err = AppError::Backend("bad location".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "bad location");

        let err = AppError::Timeout(Duration::from_millis(10_000));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "backend request timed out after 10000 ms");
    }

    #[test]
    fn oversized_forms_are_rejected_as_too_large() {
        let err = AppError::FieldTooLarge(16);
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.message(), "form field exceeds 16 bytes");
    }

    #[test]
    fn empty_message_becomes_unknown_error() {
        assert_eq!(AppError::Backend(String::new()).message(), "Unknown error");
    }

    #[test]
    fn compatibility_failure_uses_fixed_message() {
        assert_eq!(
            AppError::Compatibility.message(),
            "Failed to process your request. Please try again."
        );
    }
}
