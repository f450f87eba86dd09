use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Authorization header is missing")]
    MissingToken,

    #[error("Authorization scheme must be Bearer")]
    MalformedToken,

    #[error("The access token is invalid")]
    InvalidToken,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    fn field(&self) -> Option<String> {
        match self {
            AppError::Validation { field, .. } => Some(field.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            // Missing resources surface as 400, not 404; existing clients
            // depend on it.
            AppError::NotFound(_) => StatusCode::BAD_REQUEST,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::MissingToken
            | AppError::MalformedToken
            | AppError::InvalidToken
            | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Store and internal failures are logged with their cause but never
        // leaked to the client.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("{}", self);
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: message,
            field: self.field(),
            code: status.as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::Internal(format!("BSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        first_validation_error(&err).unwrap_or_else(|| {
            AppError::validation("", "Invalid request payload")
        })
    }
}

/// Walks a validator error tree and keeps the first failing field; the API
/// reports one error at a time.
fn first_validation_error(errors: &validator::ValidationErrors) -> Option<AppError> {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                if let Some(error) = field_errors.first() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    return Some(AppError::validation(field.to_string(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                if let Some(err) = first_validation_error(nested) {
                    return Some(err);
                }
            }
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    if let Some(err) = first_validation_error(nested) {
                        return Some(err);
                    }
                }
            }
        }
    }

    None
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::validation("year", "Enter year please").status_code(),
            StatusCode::BAD_REQUEST
        );
        // Missing resources are 400, not 404.
        assert_eq!(
            AppError::NotFound("subjects".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AlreadyExists("email".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::MissingToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::MalformedToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Database("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_keeps_field() {
        let err = AppError::validation("answerId", "answerId is required");
        assert_eq!(err.field().as_deref(), Some("answerId"));
        assert_eq!(err.to_string(), "answerId is required");
    }

    #[test]
    fn test_database_error_message_is_generic() {
        let err = AppError::Database("connection refused to mongodb://secret-host".into());
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
