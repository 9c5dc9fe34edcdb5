use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Successful responses carry the payload itself as the JSON body.
pub struct ApiSuccess<T>(pub T, pub StatusCode);

impl<T: Serialize> ApiSuccess<T> {
    pub fn ok(data: T) -> Self {
        Self(data, StatusCode::OK)
    }

    pub fn created(data: T) -> Self {
        Self(data, StatusCode::CREATED)
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let (data, status) = (self.0, self.1);
        (status, Json(data)).into_response()
    }
}

/// Body for endpoints that have nothing to return but an acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Every failure renders as `{ "error": "<message>" }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorResponse {
        error: message.into(),
    };
    (status, Json(body)).into_response()
}
