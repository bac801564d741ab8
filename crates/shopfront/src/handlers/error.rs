use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shopfront_core::product::Message;
use shopfront_core::storage::{repository_error_to_status_code, RepositoryError};
use thiserror::Error;

/// Problems with the inbound request itself.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Invalid field: {0}")]
    InvalidField(String),
    #[error("Request body too large: {0}")]
    BodyTooLarge(String),
    #[error("Could not read request body: {0}")]
    UnreadableBody(String),
}

impl RequestError {
    fn status_code(&self) -> StatusCode {
        match self {
            RequestError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<BytesRejection> for RequestError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RequestError::BodyTooLarge(rejection.body_text())
        } else {
            RequestError::UnreadableBody(rejection.body_text())
        }
    }
}

/// Handler error type that wraps `anyhow::Error`.
///
/// The status code comes from the wrapped error. [`RequestError`] is a 400
/// (413 for oversized bodies), [`RepositoryError`] maps through
/// [`repository_error_to_status_code`], and anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(request_error) = self.0.downcast_ref::<RequestError>() {
            return request_error.status_code();
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => StatusCode::from_u16(repository_error_to_status_code(repo_error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Request rejected");
        }

        (status, Json(Message::new(self.0.to_string()))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_maps_to_400() {
        let error = AppError::from(RequestError::MalformedBody("EOF".to_string()));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);

        let error = AppError::from(RequestError::InvalidField("price".to_string()));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_oversized_body_maps_to_413() {
        let error = AppError::from(RequestError::BodyTooLarge(
            "length limit exceeded".to_string(),
        ));
        assert_eq!(error.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_repository_errors_use_status_mapping() {
        let not_found = AppError::from(RepositoryError::product_not_found("p-1"));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let unavailable = AppError::from(RepositoryError::ConnectionFailed("down".to_string()));
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let error = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
