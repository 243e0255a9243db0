//! Persisted row shapes for groups, members and expenses.
//!
//! Field names follow the table columns. The wire shapes live in
//! [`super::group_view`].

use chrono::{DateTime, Utc};

use super::weights::StoredWeights;

/// A row of the `groups` table.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRecord {
    /// Primary key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Currency code, e.g. `"HKD"`.
    pub currency: String,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
    /// Last name/currency update.
    pub updated_at: DateTime<Utc>,
}

/// A row of the `members` table.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRecord {
    /// Primary key.
    pub id: String,
    /// Owning group.
    pub group_id: String,
    /// Display name.
    pub name: String,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
}

/// A row of the `expenses` table with `amount` already coerced to `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// Primary key.
    pub id: String,
    /// Owning group.
    pub group_id: String,
    /// Free-text description.
    pub description: String,
    /// Amount, rounded to two decimals by the store.
    pub amount: f64,
    /// Paying member.
    pub payer_id: String,
    /// Split-strategy tag.
    pub split_type: String,
    /// Weights exactly as the store returned them.
    pub weights: StoredWeights,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the `expenses` table.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Server-generated primary key.
    pub id: String,
    /// Owning group.
    pub group_id: String,
    /// Free-text description.
    pub description: String,
    /// Amount as submitted; the store rounds to two decimals.
    pub amount: f64,
    /// Paying member.
    pub payer_id: String,
    /// Split-strategy tag.
    pub split_type: String,
    /// Weights serialized to JSON text.
    pub weights_json: String,
}

/// Rounds to the `NUMERIC(10,2)` precision of the `amount` column.
#[must_use]
pub fn round_amount(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
