//! Aggregated group document returned by `GET /api/group/{id}`.
//!
//! [`EXPENSE_FIELD_MAP`] is the persisted-to-wire contract for expense
//! columns. The `Serialize` impl of [`ExpenseView`] is checked against it
//! pair by pair in the tests below: every persisted column must land under
//! its mapped wire key with its value intact.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::records::{ExpenseRecord, GroupRecord, MemberRecord};

/// One persisted column and the key it is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Column name in the `expenses` table.
    pub persisted: &'static str,
    /// Key in the JSON expense document.
    pub wire: &'static str,
}

/// Persisted → wire names for every published expense field, in wire order.
pub const EXPENSE_FIELD_MAP: &[FieldMapping] = &[
    FieldMapping { persisted: "id", wire: "id" },
    FieldMapping { persisted: "description", wire: "desc" },
    FieldMapping { persisted: "amount", wire: "amount" },
    FieldMapping { persisted: "payer_id", wire: "payerId" },
    FieldMapping { persisted: "split_type", wire: "splitType" },
    FieldMapping { persisted: "weights", wire: "weights" },
];

/// Looks up the wire key for a persisted expense column.
///
/// Columns that are not published (`group_id`, `created_at`) yield `None`.
#[must_use]
pub fn wire_name(persisted: &str) -> Option<&'static str> {
    EXPENSE_FIELD_MAP
        .iter()
        .find(|m| m.persisted == persisted)
        .map(|m| m.wire)
}

/// Member entry of the group document. Column names are published as-is.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MemberView {
    /// Member id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<MemberRecord> for MemberView {
    fn from(m: MemberRecord) -> Self {
        Self {
            id: m.id,
            name: m.name,
            created_at: m.created_at,
        }
    }
}

/// Expense document, also echoed by `POST /api/group/{id}/expense`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExpenseView {
    /// Expense id.
    pub id: String,
    /// Description (`description` column).
    #[serde(rename = "desc")]
    pub desc: String,
    /// Amount as a JSON number.
    pub amount: f64,
    /// Paying member (`payer_id` column).
    #[serde(rename = "payerId")]
    pub payer_id: String,
    /// Split-strategy tag (`split_type` column).
    #[serde(rename = "splitType")]
    pub split_type: String,
    /// Normalized weights: the stored JSON value, `[]` when absent.
    #[schema(value_type = Object)]
    pub weights: serde_json::Value,
}

impl From<ExpenseRecord> for ExpenseView {
    fn from(e: ExpenseRecord) -> Self {
        Self {
            id: e.id,
            desc: e.description,
            amount: e.amount,
            payer_id: e.payer_id,
            split_type: e.split_type,
            weights: e.weights.normalize(),
        }
    }
}

/// A group with its members and expenses, both oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GroupView {
    /// Group id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Currency code.
    pub currency: String,
    /// Members in creation order.
    pub members: Vec<MemberView>,
    /// Expenses in creation order.
    pub expenses: Vec<ExpenseView>,
}

impl GroupView {
    /// Builds the document from rows already ordered by the store.
    #[must_use]
    pub fn assemble(
        group: GroupRecord,
        members: Vec<MemberRecord>,
        expenses: Vec<ExpenseRecord>,
    ) -> Self {
        Self {
            id: group.id,
            name: group.name,
            currency: group.currency,
            members: members.into_iter().map(MemberView::from).collect(),
            expenses: expenses.into_iter().map(ExpenseView::from).collect(),
        }
    }
}
