//! Request extractors that report failures as [`ServiceError`].

use axum::extract::FromRequest;

use crate::error::ServiceError;

/// `axum::Json` whose rejections become [`ServiceError::InvalidRequest`],
/// so malformed bodies and missing fields share the JSON error shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServiceError))]
pub struct ApiJson<T>(pub T);
