// src/error.rs
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

/// Failures coming out of the storage layer (database or upload directory).
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("other: {0}")]
    Other(String),
}

/// Errors surfaced to API callers. Every variant renders as `{"error": message}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: RepoError,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Wraps a storage failure with the generic message the caller will see.
    ///
    /// Meant for `map_err`: `repo.insert(..).await.map_err(AppError::internal("등록 실패"))?`
    pub fn internal(message: &'static str) -> impl FnOnce(RepoError) -> AppError {
        move |source| AppError::Internal { message, source }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Forbidden(msg) => msg,
            AppError::Internal { message, source } => {
                log::error!("{}: {}", message, source);
                message
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { error: message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn internal_error_hides_source_detail() {
        let err = AppError::internal("DB 오류")(RepoError::Other("connection refused".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "DB 오류" }));
    }

    #[test]
    fn client_errors_map_to_their_status() {
        assert_eq!(AppError::BadRequest("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Forbidden("x").status_code(), StatusCode::FORBIDDEN);
    }
}
