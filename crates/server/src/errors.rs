use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use common::types::ApiMessage;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use service::geo::GeoError;

/// Uniform `{code, message}` error body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Denial body shared by every guarded handler.
    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Access Denied")
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        }
        let body = ApiMessage::new(self.status.as_u16(), self.message);
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        use models::errors::ModelError;
        match e {
            ServiceError::Validation(msg) => Self::bad_request(msg),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Db(msg) => Self::internal(msg),
            ServiceError::Model(ModelError::Validation(msg)) => Self::bad_request(msg),
            ServiceError::Model(ModelError::NotFound(msg)) => Self::not_found(msg),
            ServiceError::Model(ModelError::Db(msg)) => Self::internal(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        let status = match &e {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Conflict => StatusCode::CONFLICT,
            AuthError::NotFound => StatusCode::NOT_FOUND,
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::HashError(_) | AuthError::TokenError(_) | AuthError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, e.to_string())
    }
}

impl From<GeoError> for ApiError {
    fn from(e: GeoError) -> Self {
        match e {
            GeoError::InvalidInput(msg) => Self::bad_request(msg),
            GeoError::NoResult => Self::not_found("No Garage was found"),
            GeoError::Db(msg) => Self::internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: ApiError) -> (StatusCode, ApiMessage) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("collect body");
        (status, serde_json::from_slice(&bytes).expect("ApiMessage body"))
    }

    #[tokio::test]
    async fn denial_carries_the_shared_body() {
        let (status, msg) = body_of(ApiError::forbidden()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(msg, ApiMessage::new(403, "Access Denied"));
    }

    #[tokio::test]
    async fn unauthorized_carries_code_and_message() {
        let (status, msg) = body_of(ApiError::unauthorized("invalid or expired token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(msg.code, 401);
        assert_eq!(msg.message, "invalid or expired token");
    }
}
