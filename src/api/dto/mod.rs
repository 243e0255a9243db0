//! Data Transfer Objects for REST request/response serialization.
//!
//! Wire names are camelCase where clients expect them (`payerId`,
//! `splitType`); the group document itself is built in
//! [`crate::domain::group_view`].

pub mod common_dto;
pub mod expense_dto;
pub mod group_dto;
pub mod member_dto;

pub use common_dto::*;
pub use expense_dto::*;
pub use group_dto::*;
pub use member_dto::*;
