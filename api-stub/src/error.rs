use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failures rendered as FastAPI-style `{"detail": ...}` bodies, which is
/// what the dashboard client parses.
#[derive(Debug, Error)]
pub enum StubError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Not authenticated")]
    Unauthorized,
    #[error("Incorrect email or password")]
    BadCredentials,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unprocessable(String),
}

impl StubError {
    pub fn status(&self) -> StatusCode {
        match self {
            StubError::NotFound(_) => StatusCode::NOT_FOUND,
            StubError::Unauthorized | StubError::BadCredentials => StatusCode::UNAUTHORIZED,
            StubError::BadRequest(_) => StatusCode::BAD_REQUEST,
            StubError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response =
            (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
