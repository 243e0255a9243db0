//! Group DTOs for create and update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/group`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    /// Display name.
    pub name: String,
    /// Currency code. Defaults to `"HKD"`.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Response body for `POST /api/group` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateGroupResponse {
    /// New group id.
    pub id: String,
    /// Name echoed from the request.
    pub name: String,
    /// Resolved currency.
    pub currency: String,
}

/// Request body for `PUT /api/group/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateGroupRequest {
    /// New display name.
    pub name: String,
    /// New currency code.
    pub currency: String,
}
