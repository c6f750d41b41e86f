use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use invtrack_core::DomainError;

/// Handler error; every variant maps to a plain-text response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    #[error(transparent)]
    Form(#[from] FormRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(e) if e.is_not_found() => {
                text_error(StatusCode::NOT_FOUND, "Item not found")
            }
            ApiError::Domain(e) => {
                tracing::error!(error = %e, "request failed");
                internal_error()
            }
            ApiError::Render(e) => {
                tracing::error!(error = %e, "template rendering failed");
                internal_error()
            }
            ApiError::Form(rejection) => {
                tracing::debug!(error = %rejection, "form body rejected");
                rejection.into_response()
            }
        }
    }
}

pub fn text_error(status: StatusCode, message: &'static str) -> Response {
    (status, message).into_response()
}

fn internal_error() -> Response {
    text_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_invalid_id_are_404() {
        let res = ApiError::from(DomainError::not_found()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = ApiError::from(DomainError::invalid_id("x")).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn parse_and_store_failures_are_500() {
        let res = ApiError::from(DomainError::parse("price", "abc")).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let res = ApiError::from(DomainError::unavailable("poisoned")).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
