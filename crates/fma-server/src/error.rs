use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fma_ledger::ProgressError;
use fma_types::TypeError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Progress(ProgressError::UserNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Progress(ProgressError::Validation(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Progress(ProgressError::Locked { .. }) => StatusCode::FORBIDDEN,
            Self::Progress(ProgressError::StoreUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Progress(ProgressError::Store(_))
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TypeError> for ServerError {
    fn from(err: TypeError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = Json(json!({ "success": false, "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fma_store::StoreError;
    use fma_types::{UnitKey, UserId};

    #[test]
    fn status_mapping() {
        let cases = [
            (
                ServerError::from(ProgressError::UserNotFound(UserId::new("u").unwrap())),
                StatusCode::NOT_FOUND,
            ),
            (
                ServerError::from(ProgressError::validation("bad")),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServerError::BadRequest("bad json".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServerError::from(ProgressError::Locked {
                    unit: UnitKey::new("2").unwrap(),
                    prerequisite: UnitKey::new("1").unwrap(),
                }),
                StatusCode::FORBIDDEN,
            ),
            (
                ServerError::from(ProgressError::from(StoreError::Unavailable("down".into()))),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ServerError::from(ProgressError::from(StoreError::Serialization("x".into()))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServerError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{err}");
        }
    }

    #[test]
    fn invalid_identifiers_are_bad_requests() {
        let err: ServerError = UserId::new("a b").unwrap_err().into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn response_uses_error_envelope() {
        let response = ServerError::BadRequest("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
