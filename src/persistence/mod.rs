//! Persistence layer: groups, members and expenses.
//!
//! [`GroupStore`] is the storage seam used by the service layer. Two
//! implementations are provided:
//!
//! - [`PostgresStore`]: `sqlx::PgPool` with embedded migrations.
//! - [`MemoryStore`]: process-local tables with the same key, foreign-key
//!   and cascade rules, for local runs and tests.
//!
//! Every method is a single statement; nothing here opens a transaction.
//! Delete and update methods return the number of rows affected and leave
//! the zero-row policy to the caller.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::records::{ExpenseRecord, GroupRecord, MemberRecord, NewExpense};
use crate::error::ServiceError;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Storage operations backing the group service.
#[async_trait]
pub trait GroupStore: Send + Sync + std::fmt::Debug {
    /// Creates the schema if it does not exist. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] if a migration fails.
    async fn migrate(&self) -> Result<(), ServiceError>;

    /// Inserts a group row.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure,
    /// including a duplicate id.
    async fn insert_group(&self, id: &str, name: &str, currency: &str)
    -> Result<(), ServiceError>;

    /// Overwrites name and currency and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure.
    async fn update_group(&self, id: &str, name: &str, currency: &str)
    -> Result<u64, ServiceError>;

    /// Fetches a single group row.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure.
    async fn find_group(&self, id: &str) -> Result<Option<GroupRecord>, ServiceError>;

    /// Lists a group's members, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure.
    async fn list_members(&self, group_id: &str) -> Result<Vec<MemberRecord>, ServiceError>;

    /// Lists a group's expenses, oldest first, with `amount` as `f64`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure.
    async fn list_expenses(&self, group_id: &str) -> Result<Vec<ExpenseRecord>, ServiceError>;

    /// Inserts a member row.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure,
    /// including an unknown `group_id`.
    async fn insert_member(&self, id: &str, group_id: &str, name: &str)
    -> Result<(), ServiceError>;

    /// Deletes a member only if it belongs to `group_id`. Expenses paid by
    /// the member are removed with it.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure.
    async fn delete_member(&self, group_id: &str, member_id: &str) -> Result<u64, ServiceError>;

    /// Inserts an expense row and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure,
    /// including an unknown group or payer and unparseable weights text.
    async fn insert_expense(&self, expense: &NewExpense) -> Result<ExpenseRecord, ServiceError>;

    /// Deletes an expense only if it belongs to `group_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure.
    async fn delete_expense(&self, group_id: &str, expense_id: &str)
    -> Result<u64, ServiceError>;
}
