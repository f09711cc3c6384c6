//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion into error pages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use crate::config::{VIEW_BAD_REQUEST, VIEW_NOT_FOUND, VIEW_SERVER_ERROR};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Write-path errors
    #[error("{0}")]
    Constraint(String),

    #[error("{0}")]
    Reference(String),

    // Storage errors
    #[error("Database error")]
    Database(#[source] DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error page body
#[derive(Debug, Serialize)]
struct ErrorPage {
    view: &'static str,
    flash: Vec<String>,
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Constraint(_) => "CONSTRAINT_ERROR",
            AppError::Reference(_) => "REFERENCE_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Constraint(_) | AppError::Reference(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    fn view(&self) -> &'static str {
        match self {
            AppError::NotFound => VIEW_NOT_FOUND,
            AppError::Constraint(_) | AppError::Reference(_) => VIEW_BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => VIEW_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// Error page that also shows `flash` messages
    pub fn into_page(self, flash: Vec<String>) -> Response {
        let status = self.status();
        let body = ErrorPage {
            view: self.view(),
            flash,
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_page(Vec::new())
    }
}

/// Foreign-key violations raised by the engine are dangling references,
/// everything else is a persistence failure.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => AppError::Reference(msg),
            _ => AppError::Database(err),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Constraint(format_validation_errors(&errors))
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    // field_errors() is a HashMap; keep the message stable across runs
    messages.sort();
    messages.join(", ")
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn constraint(msg: impl Into<String>) -> Self {
        AppError::Constraint(msg.into())
    }

    pub fn reference(msg: impl Into<String>) -> Self {
        AppError::Reference(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(length(max = 2, message = "State is too long"))]
        state: String,
    }

    #[test]
    fn test_validation_errors_become_constraint() {
        let sample = Sample {
            name: String::new(),
            state: "Massachusetts".to_string(),
        };
        let err = AppError::from(sample.validate().unwrap_err());

        match err {
            AppError::Constraint(msg) => {
                assert_eq!(msg, "Name is required, State is too long");
            }
            other => panic!("expected constraint error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::constraint("bad").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(DbErr::Custom("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::Database(DbErr::Custom("password=secret".into()));
        assert_eq!(err.user_message(), "A database error occurred");

        let err = AppError::reference("Artist 7 does not exist");
        assert_eq!(err.user_message(), "Artist 7 does not exist");
    }

    #[test]
    fn test_non_fk_db_errors_stay_database_errors() {
        let err = AppError::from(DbErr::Custom("connection reset".into()));
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<i32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
    }
}
