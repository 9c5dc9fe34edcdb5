//! Extractor wrappers whose rejections render through [`AppError`], so a
//! malformed body, query or path gets the same 400 JSON error as a failed
//! validation instead of axum's plain-text 415/422.

use crate::common::error::AppError;
use axum::extract::{FromRequest, FromRequestParts, Multipart, Request};

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

pub struct AppMultipart(pub Multipart);

impl<S> FromRequest<S> for AppMultipart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Multipart::from_request(req, state)
            .await
            .map(AppMultipart)
            .map_err(|e| AppError::Validation(e.body_text()))
    }
}
