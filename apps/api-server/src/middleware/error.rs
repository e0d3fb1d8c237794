//! Error handling - maps every failure kind to its HTTP response.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use quill_core::{DomainError, RepoError};
use quill_shared::MessageResponse;
use std::fmt;

/// Application-level error type. `ResponseError` below is the one table
/// from failure kind to status code and body.
#[derive(Debug)]
pub enum AppError {
    /// A required create field is absent or null.
    MissingField(&'static str),
    /// Request body is not JSON or a field has no text form.
    BadRequest(String),
    /// No route matches the request.
    NotFound,
    /// Store failure on list, get, create or update.
    Internal(String),
    /// Store failure on delete.
    DeleteFailed(String),
}

impl AppError {
    pub fn delete_failed(err: RepoError) -> Self {
        AppError::DeleteFailed(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingField(field) => write!(f, "Missing `{}` in request body", field),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound => write!(f, "Not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::DeleteFailed(msg) => write!(f, "Delete failed: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) | AppError::DeleteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::MissingField(_) => {
                return HttpResponse::build(self.status_code())
                    .content_type(ContentType::plaintext())
                    .body(self.to_string());
            }
            AppError::BadRequest(msg) => {
                return HttpResponse::build(self.status_code())
                    .content_type(ContentType::plaintext())
                    .body(msg.clone());
            }
            AppError::NotFound => MessageResponse::not_found(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                MessageResponse::internal_error()
            }
            AppError::DeleteFailed(detail) => {
                tracing::error!("Delete failed: {}", detail);
                MessageResponse::delete_failed()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        tracing::error!("{}", err);
        match err {
            DomainError::MissingField(field) => AppError::MissingField(field),
        }
    }
}

/// Every store failure kind, including a missing record, is a generic 500.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            RepoError::Query(msg) => AppError::Internal(format!("Database query error: {}", msg)),
            RepoError::NotFound => AppError::Internal("Post not found".to_string()),
            RepoError::InvalidId(id) => AppError::Internal(format!("Invalid post id: {}", id)),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_missing_field_is_plain_text_400() {
        let err = AppError::from(DomainError::MissingField("author"));
        assert!(matches!(err, AppError::MissingField("author")));
        let res = err.error_response();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let content_type = res.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));

        let body = to_bytes(res.into_body()).await.unwrap();
        assert_eq!(body, "Missing `author` in request body");
    }

    #[actix_web::test]
    async fn test_bad_request_keeps_detail() {
        let res = AppError::BadRequest("Invalid JSON body: EOF".to_string()).error_response();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(res.into_body()).await.unwrap();
        assert_eq!(body, "Invalid JSON body: EOF");
    }

    #[test]
    fn test_store_failures_map_to_500() {
        let errors = [
            RepoError::Connection("refused".to_string()),
            RepoError::Query("syntax".to_string()),
            RepoError::NotFound,
            RepoError::InvalidId("abc".to_string()),
        ];

        for err in errors {
            let app_err = AppError::from(err);
            assert_eq!(app_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(matches!(app_err, AppError::Internal(_)));
        }
    }

    #[actix_web::test]
    async fn test_delete_failure_message() {
        let res = AppError::delete_failed(RepoError::NotFound).error_response();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(res.into_body()).await.unwrap();
        assert_eq!(body, r#"{"message":"Failed to delete"}"#);
    }
}
