//! Conversion of domain and request errors into HTTP responses.

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use std::fmt;

use tp_core::errors::DomainError;
use tp_shared::validation::ValidationErrors;
use tp_shared::{error_codes, ErrorResponse};

/// Error returned by route handlers
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// Request body failed DTO validation
    Validation(validator::ValidationErrors),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Domain(error) => write!(f, "{}", error),
            ApiError::Validation(errors) => write!(f, "{}", errors),
        }
    }
}

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidTransition { .. } | DomainError::Conflict { .. } => StatusCode::CONFLICT,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);
    let response = match error {
        DomainError::Internal { message } => {
            tracing::error!(%message, "Internal error while handling request");
            ErrorResponse::new(error.code(), "An internal error occurred")
        }
        DomainError::ValidationFailed { field, .. } => {
            tracing::debug!(%error, "Request rejected");
            ErrorResponse::new(error.code(), error.to_string()).add_detail("field", field)
        }
        DomainError::InvalidTransition { state, action } => {
            tracing::debug!(%error, "Request rejected");
            ErrorResponse::new(error.code(), error.to_string())
                .add_detail("state", state)
                .add_detail("action", action)
        }
        _ => {
            tracing::debug!(%error, "Request rejected");
            ErrorResponse::new(error.code(), error.to_string())
        }
    };

    HttpResponse::build(status).json(response)
}

/// Handle DTO validation failures, reporting every offending field
pub fn handle_validation_errors(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut collected = ValidationErrors::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            collected.add_error(field.to_string(), message, error.code.to_string());
        }
    }

    let message = collected
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| String::from("Request validation failed"));
    tracing::debug!(%message, "Request body rejected");

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_FAILED, message)
            .add_detail("fields", collected.to_field_errors()),
    )
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => status_for(error),
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => handle_domain_error(error),
            ApiError::Validation(errors) => handle_validation_errors(errors),
        }
    }
}

/// Malformed JSON bodies get the standard error envelope
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, error.to_string()));
    InternalError::from_response(error, response).into()
}
