//! REST endpoint handlers organized by resource.

pub mod expense;
pub mod group;
pub mod member;
pub mod system;

use axum::Router;
use axum::extract::OriginalUri;
use axum::http::Method;

use crate::app_state::AppState;
use crate::error::ServiceError;

/// Composes all resource routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(group::routes())
        .merge(member::routes())
        .merge(expense::routes())
        .method_not_allowed_fallback(method_not_allowed)
}

async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ServiceError {
    ServiceError::MethodNotAllowed(format!("{method} {}", uri.path()))
}
