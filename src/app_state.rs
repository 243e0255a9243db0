//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::GroupService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Group service for all business logic.
    pub group_service: Arc<GroupService>,
}

impl AppState {
    /// Wraps a service for sharing across handlers.
    #[must_use]
    pub fn new(group_service: GroupService) -> Self {
        Self {
            group_service: Arc::new(group_service),
        }
    }
}
