use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::DomainError;

/// Constant-shape JSON body carried by every failure response.
///
/// The `message` is the canonical string for the status code; the detail that
/// produced the error is logged, never serialized.
#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Invalid method: {detail}")]
    MethodNotAllowed { detail: String },
    #[error("Unprocessable: {detail}")]
    Unprocessable { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Canonical user-facing message for this error's status code.
    pub fn message(&self) -> &'static str {
        match self.status() {
            StatusCode::BAD_REQUEST => "Bad request",
            StatusCode::NOT_FOUND => "Page not found",
            StatusCode::METHOD_NOT_ALLOWED => "Invalid method!",
            StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable resources",
            _ => "Internal server error",
        }
    }

    fn detail(&self) -> &str {
        match self {
            AppError::BadRequest { detail }
            | AppError::NotFound { detail }
            | AppError::MethodNotAllowed { detail }
            | AppError::Unprocessable { detail }
            | AppError::Db { detail }
            | AppError::Config { detail } => detail,
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn method_not_allowed(detail: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            detail: detail.into(),
        }
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::Unprocessable {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_, detail) => AppError::NotFound { detail },
            DomainError::Infra(_, detail) => AppError::Db { detail },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), detail = %self.detail(), "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), detail = %self.detail(), "request rejected");
        }

        HttpResponse::build(status).json(ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::{InfraErrorKind, NotFoundKind};

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::bad_request("x").status().as_u16(), 400);
        assert_eq!(AppError::not_found("x").status().as_u16(), 404);
        assert_eq!(AppError::method_not_allowed("x").status().as_u16(), 405);
        assert_eq!(AppError::unprocessable("x").status().as_u16(), 422);
        assert_eq!(AppError::db("x").status().as_u16(), 500);
        assert_eq!(AppError::config("x").status().as_u16(), 500);
    }

    #[test]
    fn test_canonical_messages() {
        assert_eq!(AppError::bad_request("x").message(), "Bad request");
        assert_eq!(AppError::not_found("x").message(), "Page not found");
        assert_eq!(AppError::method_not_allowed("x").message(), "Invalid method!");
        assert_eq!(
            AppError::unprocessable("x").message(),
            "Unprocessable resources"
        );
        assert_eq!(AppError::db("x").message(), "Internal server error");
    }

    #[test]
    fn test_domain_error_mapping() {
        let err: AppError =
            DomainError::not_found(NotFoundKind::Question, "Question 7 not found").into();
        assert_eq!(err.status().as_u16(), 404);

        let err: AppError =
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable").into();
        assert_eq!(err.status().as_u16(), 500);
    }
}
