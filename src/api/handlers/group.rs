//! Group handlers: create, read, update.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CreateGroupRequest, CreateGroupResponse, SuccessResponse, UpdateGroupRequest,
};
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::domain::GroupView;
use crate::error::{ErrorResponse, ServiceError};

/// `POST /group` — Create a group.
///
/// # Errors
///
/// Returns [`ServiceError`] on a malformed body or store failure.
#[utoipa::path(
    post,
    path = "/api/group",
    tag = "Groups",
    summary = "Create a group",
    description = "Creates an empty group. `currency` defaults to HKD.",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = CreateGroupResponse),
        (status = 400, description = "Malformed body or missing name", body = ErrorResponse),
    )
)]
pub async fn create_group(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateGroupRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let (id, currency) = state
        .group_service
        .create_group(&req.name, req.currency.as_deref())
        .await?;

    let response = CreateGroupResponse {
        id: id.into_inner(),
        name: req.name,
        currency,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /group/:id` — Group with members and expenses.
///
/// # Errors
///
/// Returns [`ServiceError::GroupNotFound`] if the group does not exist.
#[utoipa::path(
    get,
    path = "/api/group/{id}",
    tag = "Groups",
    summary = "Get a group",
    description = "Returns the group with its members and expenses, each oldest first. Expense weights are returned as stored, `[]` when absent.",
    params(
        ("id" = String, Path, description = "Group id"),
    ),
    responses(
        (status = 200, description = "Group document", body = GroupView),
        (status = 404, description = "Group not found", body = ErrorResponse),
    )
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GroupView>, ServiceError> {
    let view = state.group_service.get_group(&id).await?;
    Ok(Json(view))
}

/// `PUT /group/:id` — Rename a group or change its currency.
///
/// # Errors
///
/// Returns [`ServiceError`] on a malformed body or store failure.
#[utoipa::path(
    put,
    path = "/api/group/{id}",
    tag = "Groups",
    summary = "Update a group",
    description = "Overwrites name and currency. An unknown id succeeds unless strict mutations are enabled.",
    params(
        ("id" = String, Path, description = "Group id"),
    ),
    request_body = UpdateGroupRequest,
    responses(
        (status = 200, description = "Group updated", body = SuccessResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "Group not found (strict mode)", body = ErrorResponse),
    )
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateGroupRequest>,
) -> Result<Json<SuccessResponse>, ServiceError> {
    state
        .group_service
        .update_group(&id, &req.name, &req.currency)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Group routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/group", post(create_group))
        .route("/group/{id}", get(get_group).put(update_group))
}
