//! Service layer: business logic orchestration.
//!
//! [`GroupService`] runs the group, member and expense operations against
//! a [`crate::persistence::GroupStore`] and decides how zero-row mutations
//! are reported.

pub mod group_service;

pub use group_service::{DEFAULT_CURRENCY, ExpenseInput, GroupService};
