//! Member DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/group/{id}/member`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMemberRequest {
    /// Display name.
    pub name: String,
}

/// Response body for `POST /api/group/{id}/member` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct AddMemberResponse {
    /// New member id.
    pub id: String,
    /// Name echoed from the request.
    pub name: String,
}
