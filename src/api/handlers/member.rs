//! Member handlers: add, remove.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, post};
use axum::{Json, Router};

use crate::api::dto::{AddMemberRequest, AddMemberResponse, SuccessResponse};
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, ServiceError};

/// `POST /group/:id/member` — Add a member.
///
/// # Errors
///
/// Returns [`ServiceError`] on a malformed body or if the group does not
/// exist.
#[utoipa::path(
    post,
    path = "/api/group/{id}/member",
    tag = "Members",
    summary = "Add a member",
    params(
        ("id" = String, Path, description = "Group id"),
    ),
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member added", body = AddMemberResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Unknown group or store failure", body = ErrorResponse),
    )
)]
pub async fn add_member(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    ApiJson(req): ApiJson<AddMemberRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = state.group_service.add_member(&group_id, &req.name).await?;

    let response = AddMemberResponse {
        id: id.into_inner(),
        name: req.name,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `DELETE /group/:id/member/:member_id` — Remove a member.
///
/// Expenses the member paid for are removed with it.
///
/// # Errors
///
/// Returns [`ServiceError`] on store failure, or not found in strict mode.
#[utoipa::path(
    delete,
    path = "/api/group/{id}/member/{member_id}",
    tag = "Members",
    summary = "Remove a member",
    description = "Deletes the member only if it belongs to the group in the path. Expenses paid by the member are deleted too.",
    params(
        ("id" = String, Path, description = "Group id"),
        ("member_id" = String, Path, description = "Member id"),
    ),
    responses(
        (status = 200, description = "Acknowledged", body = SuccessResponse),
        (status = 404, description = "Member not found (strict mode)", body = ErrorResponse),
    )
)]
pub async fn remove_member(
    State(state): State<AppState>,
    Path((group_id, member_id)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>, ServiceError> {
    state
        .group_service
        .remove_member(&group_id, &member_id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Member routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/group/{id}/member", post(add_member))
        .route("/group/{id}/member/{member_id}", delete(remove_member))
}
