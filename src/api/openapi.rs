//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{
    AddExpenseRequest, AddMemberRequest, AddMemberResponse, CreateGroupRequest,
    CreateGroupResponse, SuccessResponse, UpdateGroupRequest,
};
use crate::api::handlers::{expense, group, member, system};
use crate::domain::{ExpenseView, GroupView, MemberView};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated API description, served at `/api-docs/openapi.json`.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "group-split-gateway", description = "Groups, members and expenses for shared-cost splitting."),
    paths(
        group::create_group,
        group::get_group,
        group::update_group,
        member::add_member,
        member::remove_member,
        expense::add_expense,
        expense::remove_expense,
        system::health_handler,
    ),
    components(schemas(
        CreateGroupRequest,
        CreateGroupResponse,
        UpdateGroupRequest,
        AddMemberRequest,
        AddMemberResponse,
        AddExpenseRequest,
        SuccessResponse,
        GroupView,
        MemberView,
        ExpenseView,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Groups", description = "Group lifecycle and the aggregated group document"),
        (name = "Members", description = "Group membership"),
        (name = "Expenses", description = "Recorded expenses"),
        (name = "System", description = "Health and metadata"),
    )
)]
pub struct ApiDoc;
