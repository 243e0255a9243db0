//! Group service: the six group, member and expense operations.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::EntityId;
use crate::domain::group_view::{ExpenseView, GroupView};
use crate::domain::records::NewExpense;
use crate::error::ServiceError;
use crate::persistence::GroupStore;

/// Currency assigned to groups created without one.
pub const DEFAULT_CURRENCY: &str = "HKD";

/// Expense fields accepted from a client.
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    /// Free-text description.
    pub description: String,
    /// Amount; stored rounded to two decimals.
    pub amount: f64,
    /// Paying member id.
    pub payer_id: String,
    /// Split-strategy tag, stored as given.
    pub split_type: String,
    /// Opaque weights payload. `None` is stored as `[]`.
    pub weights: Option<Value>,
}

/// Orchestration layer over a [`GroupStore`].
///
/// Holds no state besides the store handle, so it is shared across
/// requests behind an `Arc`. Multi-statement operations (the aggregation
/// read) are not atomic.
///
/// Updates and deletes that match no row succeed unless strict mutations
/// are enabled, in which case they fail with the matching not-found error.
#[derive(Debug, Clone)]
pub struct GroupService {
    store: Arc<dyn GroupStore>,
    strict_mutations: bool,
}

impl GroupService {
    /// Creates a lenient `GroupService`.
    #[must_use]
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self {
            store,
            strict_mutations: false,
        }
    }

    /// Sets whether zero-row updates and deletes are errors.
    #[must_use]
    pub fn with_strict_mutations(mut self, strict: bool) -> Self {
        self.strict_mutations = strict;
        self
    }

    /// Creates a group, defaulting the currency to [`DEFAULT_CURRENCY`].
    /// Returns the new id and the resolved currency.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] if the insert fails.
    pub async fn create_group(
        &self,
        name: &str,
        currency: Option<&str>,
    ) -> Result<(EntityId, String), ServiceError> {
        let id = EntityId::generate();
        let currency = currency.unwrap_or(DEFAULT_CURRENCY).to_string();

        self.store.insert_group(id.as_str(), name, &currency).await?;

        tracing::info!(group_id = %id, %currency, "group created");
        Ok((id, currency))
    }

    /// Reads a group together with its members and expenses.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::GroupNotFound`] if no group has this id, or a
    /// [`ServiceError::PersistenceError`] on store failure.
    pub async fn get_group(&self, group_id: &str) -> Result<GroupView, ServiceError> {
        let group = self
            .store
            .find_group(group_id)
            .await?
            .ok_or_else(|| ServiceError::GroupNotFound(group_id.to_string()))?;
        let members = self.store.list_members(group_id).await?;
        let expenses = self.store.list_expenses(group_id).await?;

        tracing::debug!(
            group_id,
            members = members.len(),
            expenses = expenses.len(),
            "group loaded"
        );
        Ok(GroupView::assemble(group, members, expenses))
    }

    /// Overwrites a group's name and currency.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure, or
    /// [`ServiceError::GroupNotFound`] in strict mode when nothing matched.
    pub async fn update_group(
        &self,
        group_id: &str,
        name: &str,
        currency: &str,
    ) -> Result<(), ServiceError> {
        let rows = self.store.update_group(group_id, name, currency).await?;
        if rows == 0 {
            tracing::debug!(group_id, "update matched no group");
            if self.strict_mutations {
                return Err(ServiceError::GroupNotFound(group_id.to_string()));
            }
        } else {
            tracing::info!(group_id, currency, "group updated");
        }
        Ok(())
    }

    /// Adds a member to a group and returns the new member id.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] if the insert fails,
    /// e.g. because the group does not exist.
    pub async fn add_member(&self, group_id: &str, name: &str) -> Result<EntityId, ServiceError> {
        let id = EntityId::generate();
        self.store
            .insert_member(id.as_str(), group_id, name)
            .await?;

        tracing::info!(group_id, member_id = %id, "member added");
        Ok(id)
    }

    /// Removes a member if it belongs to `group_id`; expenses the member
    /// paid for go with it.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure, or
    /// [`ServiceError::MemberNotFound`] in strict mode when nothing matched.
    pub async fn remove_member(&self, group_id: &str, member_id: &str) -> Result<(), ServiceError> {
        let rows = self.store.delete_member(group_id, member_id).await?;
        if rows == 0 {
            tracing::debug!(group_id, member_id, "delete matched no member");
            if self.strict_mutations {
                return Err(ServiceError::MemberNotFound {
                    group_id: group_id.to_string(),
                    member_id: member_id.to_string(),
                });
            }
        } else {
            tracing::info!(group_id, member_id, "member removed");
        }
        Ok(())
    }

    /// Records an expense and returns it in wire shape, as stored.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] for a non-finite amount,
    /// or a [`ServiceError::PersistenceError`] if the insert fails (unknown
    /// group or payer).
    pub async fn add_expense(
        &self,
        group_id: &str,
        input: ExpenseInput,
    ) -> Result<ExpenseView, ServiceError> {
        if !input.amount.is_finite() {
            return Err(ServiceError::InvalidRequest(format!(
                "amount must be a finite number, got {}",
                input.amount
            )));
        }

        let weights = input.weights.unwrap_or_else(|| Value::Array(Vec::new()));
        let weights_json = serde_json::to_string(&weights)
            .map_err(|e| ServiceError::Internal(format!("weights serialization: {e}")))?;

        let expense = NewExpense {
            id: EntityId::generate().into_inner(),
            group_id: group_id.to_string(),
            description: input.description,
            amount: input.amount,
            payer_id: input.payer_id,
            split_type: input.split_type,
            weights_json,
        };
        let record = self.store.insert_expense(&expense).await?;

        tracing::info!(
            group_id,
            expense_id = %record.id,
            payer_id = %record.payer_id,
            amount = record.amount,
            "expense added"
        );
        Ok(ExpenseView::from(record))
    }

    /// Removes an expense if it belongs to `group_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on store failure, or
    /// [`ServiceError::ExpenseNotFound`] in strict mode when nothing matched.
    pub async fn remove_expense(
        &self,
        group_id: &str,
        expense_id: &str,
    ) -> Result<(), ServiceError> {
        let rows = self.store.delete_expense(group_id, expense_id).await?;
        if rows == 0 {
            tracing::debug!(group_id, expense_id, "delete matched no expense");
            if self.strict_mutations {
                return Err(ServiceError::ExpenseNotFound {
                    group_id: group_id.to_string(),
                    expense_id: expense_id.to_string(),
                });
            }
        } else {
            tracing::info!(group_id, expense_id, "expense removed");
        }
        Ok(())
    }
}
