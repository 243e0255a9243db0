//! Expense handlers: add, remove.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, post};
use axum::{Json, Router};

use crate::api::dto::{AddExpenseRequest, SuccessResponse};
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::domain::ExpenseView;
use crate::error::{ErrorResponse, ServiceError};

/// `POST /group/:id/expense` — Record an expense.
///
/// # Errors
///
/// Returns [`ServiceError`] on a malformed body, a bad amount, or an
/// unknown group or payer.
#[utoipa::path(
    post,
    path = "/api/group/{id}/expense",
    tag = "Expenses",
    summary = "Add an expense",
    description = "Stores the expense and echoes it back in the same shape used by the group document. `weights` is stored verbatim.",
    params(
        ("id" = String, Path, description = "Group id"),
    ),
    request_body = AddExpenseRequest,
    responses(
        (status = 201, description = "Expense recorded", body = ExpenseView),
        (status = 400, description = "Malformed body or amount", body = ErrorResponse),
        (status = 500, description = "Unknown group or payer, or store failure", body = ErrorResponse),
    )
)]
pub async fn add_expense(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    ApiJson(req): ApiJson<AddExpenseRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let input = req.into_input()?;
    let view = state.group_service.add_expense(&group_id, input).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// `DELETE /group/:id/expense/:expense_id` — Remove an expense.
///
/// # Errors
///
/// Returns [`ServiceError`] on store failure, or not found in strict mode.
#[utoipa::path(
    delete,
    path = "/api/group/{id}/expense/{expense_id}",
    tag = "Expenses",
    summary = "Remove an expense",
    params(
        ("id" = String, Path, description = "Group id"),
        ("expense_id" = String, Path, description = "Expense id"),
    ),
    responses(
        (status = 200, description = "Acknowledged", body = SuccessResponse),
        (status = 404, description = "Expense not found (strict mode)", body = ErrorResponse),
    )
)]
pub async fn remove_expense(
    State(state): State<AppState>,
    Path((group_id, expense_id)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>, ServiceError> {
    state
        .group_service
        .remove_expense(&group_id, &expense_id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/group/{id}/expense", post(add_expense))
        .route("/group/{id}/expense/{expense_id}", delete(remove_expense))
}
