//! Shared DTO types used across multiple endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgment body for updates and deletes: `{"success": true}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
}

impl SuccessResponse {
    /// The one acknowledgment value.
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}
