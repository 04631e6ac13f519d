//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. This is the single place where upstream source errors become
//! client-facing errors.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::ports::UserPostsSourceError;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        error.redacted()
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<UserPostsSourceError> for Error {
    fn from(err: UserPostsSourceError) -> Self {
        match err {
            UserPostsSourceError::NotFound { user_id } => {
                Error::not_found(format!("user {user_id} not found"))
            }
            UserPostsSourceError::Transport { .. }
            | UserPostsSourceError::Timeout { .. }
            | UserPostsSourceError::Decode { .. } => {
                let internal = Error::internal(err.to_string());
                error!(
                    kind = err.kind(),
                    error = %err,
                    trace_id = internal.trace_id().unwrap_or("-"),
                    "upstream failure"
                );
                internal
            }
        }
    }
}
