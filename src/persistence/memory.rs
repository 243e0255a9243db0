//! In-process store with the same constraints as the PostgreSQL schema.
//!
//! [`MemoryStore`] keeps the three tables in insertion order behind a single
//! [`tokio::sync::RwLock`]. Primary keys, foreign keys and `ON DELETE
//! CASCADE` are enforced the way the migration declares them, so service and
//! router behavior is identical across backends.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::GroupStore;
use crate::domain::records::{
    ExpenseRecord, GroupRecord, MemberRecord, NewExpense, round_amount,
};
use crate::domain::weights::StoredWeights;
use crate::error::ServiceError;

#[derive(Debug, Default)]
struct Tables {
    groups: Vec<GroupRecord>,
    members: Vec<MemberRecord>,
    expenses: Vec<ExpenseRecord>,
}

/// Volatile store for local runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_key(table: &str, id: &str) -> ServiceError {
    ServiceError::PersistenceError(format!(
        "duplicate key value violates unique constraint \"{table}_pkey\": id {id}"
    ))
}

/// Smallest magnitude that no longer fits `NUMERIC(10,2)`.
const AMOUNT_OVERFLOW: f64 = 1e8;

fn foreign_key(table: &str, column: &str, value: &str) -> ServiceError {
    ServiceError::PersistenceError(format!(
        "insert on table \"{table}\" violates foreign key constraint on {column}: {value} is not present"
    ))
}

#[async_trait]
impl GroupStore for MemoryStore {
    async fn migrate(&self) -> Result<(), ServiceError> {
        Ok(())
    }

    async fn insert_group(
        &self,
        id: &str,
        name: &str,
        currency: &str,
    ) -> Result<(), ServiceError> {
        let mut tables = self.tables.write().await;
        if tables.groups.iter().any(|g| g.id == id) {
            return Err(duplicate_key("groups", id));
        }
        let now = Utc::now();
        tables.groups.push(GroupRecord {
            id: id.to_string(),
            name: name.to_string(),
            currency: currency.to_string(),
            created_at: now,
            updated_at: now,
        });
        Ok(())
    }

    async fn update_group(
        &self,
        id: &str,
        name: &str,
        currency: &str,
    ) -> Result<u64, ServiceError> {
        let mut tables = self.tables.write().await;
        let Some(group) = tables.groups.iter_mut().find(|g| g.id == id) else {
            return Ok(0);
        };
        group.name = name.to_string();
        group.currency = currency.to_string();
        group.updated_at = Utc::now();
        Ok(1)
    }

    async fn find_group(&self, id: &str) -> Result<Option<GroupRecord>, ServiceError> {
        let tables = self.tables.read().await;
        Ok(tables.groups.iter().find(|g| g.id == id).cloned())
    }

    async fn list_members(&self, group_id: &str) -> Result<Vec<MemberRecord>, ServiceError> {
        let tables = self.tables.read().await;
        Ok(tables
            .members
            .iter()
            .filter(|m| m.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn list_expenses(&self, group_id: &str) -> Result<Vec<ExpenseRecord>, ServiceError> {
        let tables = self.tables.read().await;
        Ok(tables
            .expenses
            .iter()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn insert_member(
        &self,
        id: &str,
        group_id: &str,
        name: &str,
    ) -> Result<(), ServiceError> {
        let mut tables = self.tables.write().await;
        if tables.members.iter().any(|m| m.id == id) {
            return Err(duplicate_key("members", id));
        }
        if !tables.groups.iter().any(|g| g.id == group_id) {
            return Err(foreign_key("members", "group_id", group_id));
        }
        tables.members.push(MemberRecord {
            id: id.to_string(),
            group_id: group_id.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn delete_member(&self, group_id: &str, member_id: &str) -> Result<u64, ServiceError> {
        let mut tables = self.tables.write().await;
        let before = tables.members.len();
        tables
            .members
            .retain(|m| !(m.id == member_id && m.group_id == group_id));
        let removed = before - tables.members.len();
        if removed > 0 {
            // payer_id cascade
            tables.expenses.retain(|e| e.payer_id != member_id);
        }
        Ok(removed as u64)
    }

    async fn insert_expense(&self, expense: &NewExpense) -> Result<ExpenseRecord, ServiceError> {
        let weights = serde_json::from_str::<serde_json::Value>(&expense.weights_json)
            .map_err(|e| ServiceError::PersistenceError(format!("invalid input syntax for type json: {e}")))?;
        let amount = round_amount(expense.amount);
        if amount.is_nan() || amount.abs() >= AMOUNT_OVERFLOW {
            return Err(ServiceError::PersistenceError(format!(
                "numeric field overflow: {} does not fit NUMERIC(10,2)",
                expense.amount
            )));
        }

        let mut tables = self.tables.write().await;
        if tables.expenses.iter().any(|e| e.id == expense.id) {
            return Err(duplicate_key("expenses", &expense.id));
        }
        if !tables.groups.iter().any(|g| g.id == expense.group_id) {
            return Err(foreign_key("expenses", "group_id", &expense.group_id));
        }
        if !tables.members.iter().any(|m| m.id == expense.payer_id) {
            return Err(foreign_key("expenses", "payer_id", &expense.payer_id));
        }

        let record = ExpenseRecord {
            id: expense.id.clone(),
            group_id: expense.group_id.clone(),
            description: expense.description.clone(),
            amount,
            payer_id: expense.payer_id.clone(),
            split_type: expense.split_type.clone(),
            weights: StoredWeights::from(weights),
            created_at: Utc::now(),
        };
        tables.expenses.push(record.clone());
        Ok(record)
    }

    async fn delete_expense(
        &self,
        group_id: &str,
        expense_id: &str,
    ) -> Result<u64, ServiceError> {
        let mut tables = self.tables.write().await;
        let before = tables.expenses.len();
        tables
            .expenses
            .retain(|e| !(e.id == expense_id && e.group_id == group_id));
        Ok((before - tables.expenses.len()) as u64)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn new_expense(id: &str, group_id: &str, payer_id: &str, weights_json: &str) -> NewExpense {
        NewExpense {
            id: id.to_string(),
            group_id: group_id.to_string(),
            description: "Taxi".to_string(),
            amount: 80.0,
            payer_id: payer_id.to_string(),
            split_type: "equal".to_string(),
            weights_json: weights_json.to_string(),
        }
    }

    async fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        let Ok(()) = store.insert_group("g1", "Trip", "HKD").await else {
            panic!("insert g1");
        };
        let Ok(()) = store.insert_group("g2", "Flat", "EUR").await else {
            panic!("insert g2");
        };
        let Ok(()) = store.insert_member("m1", "g1", "Ann").await else {
            panic!("insert m1");
        };
        let Ok(()) = store.insert_member("m2", "g1", "Bo").await else {
            panic!("insert m2");
        };
        store
    }

    #[tokio::test]
    async fn duplicate_group_id_is_rejected() {
        let store = seeded().await;
        let result = store.insert_group("g1", "Again", "HKD").await;
        assert!(matches!(result, Err(ServiceError::PersistenceError(_))));
    }

    #[tokio::test]
    async fn member_requires_existing_group() {
        let store = seeded().await;
        let result = store.insert_member("m9", "missing", "Cy").await;
        assert!(matches!(result, Err(ServiceError::PersistenceError(_))));
    }

    #[tokio::test]
    async fn expense_requires_existing_payer() {
        let store = seeded().await;
        let result = store
            .insert_expense(&new_expense("e1", "g1", "nobody", "[]"))
            .await;
        assert!(matches!(result, Err(ServiceError::PersistenceError(_))));
    }

    #[tokio::test]
    async fn expense_weights_text_must_be_json() {
        let store = seeded().await;
        let result = store
            .insert_expense(&new_expense("e1", "g1", "m1", "{bad"))
            .await;
        assert!(matches!(result, Err(ServiceError::PersistenceError(_))));
    }

    #[tokio::test]
    async fn amount_must_fit_numeric_column() {
        let store = seeded().await;

        let mut largest = new_expense("e1", "g1", "m1", "[]");
        largest.amount = 99_999_999.99;
        let Ok(record) = store.insert_expense(&largest).await else {
            panic!("largest two-decimal amount must fit");
        };
        assert!((record.amount - 99_999_999.99).abs() < f64::EPSILON * 1e8);

        for (id, amount) in [("e2", 1e8), ("e3", -1e12), ("e4", 99_999_999.996)] {
            let mut too_big = new_expense(id, "g1", "m1", "[]");
            too_big.amount = amount;
            let result = store.insert_expense(&too_big).await;
            assert!(
                matches!(result, Err(ServiceError::PersistenceError(_))),
                "{amount} must overflow"
            );
        }

        let Ok(expenses) = store.list_expenses("g1").await else {
            panic!("list failed");
        };
        assert_eq!(expenses.len(), 1);
    }

    #[tokio::test]
    async fn delete_member_is_scoped_to_group() {
        let store = seeded().await;

        let Ok(0) = store.delete_member("g2", "m1").await else {
            panic!("cross-group delete must affect no rows");
        };
        let Ok(1) = store.delete_member("g1", "m1").await else {
            panic!("scoped delete must affect one row");
        };

        let Ok(members) = store.list_members("g1").await else {
            panic!("list failed");
        };
        let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["m2"]);
    }

    #[tokio::test]
    async fn delete_member_cascades_to_paid_expenses() {
        let store = seeded().await;
        for (id, payer) in [("e1", "m1"), ("e2", "m2"), ("e3", "m1")] {
            let Ok(_) = store.insert_expense(&new_expense(id, "g1", payer, "[]")).await else {
                panic!("insert {id}");
            };
        }

        let Ok(1) = store.delete_member("g1", "m1").await else {
            panic!("delete failed");
        };

        let Ok(expenses) = store.list_expenses("g1").await else {
            panic!("list failed");
        };
        let ids: Vec<&str> = expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e2"]);
    }

    #[tokio::test]
    async fn delete_expense_is_scoped_to_group() {
        let store = seeded().await;
        let Ok(_) = store.insert_expense(&new_expense("e1", "g1", "m1", "[]")).await else {
            panic!("insert failed");
        };

        assert!(matches!(store.delete_expense("g2", "e1").await, Ok(0)));
        assert!(matches!(store.delete_expense("g1", "e1").await, Ok(1)));
        assert!(matches!(store.delete_expense("g1", "e1").await, Ok(0)));
    }

    #[tokio::test]
    async fn update_reports_rows_affected() {
        let store = seeded().await;
        assert!(matches!(store.update_group("g1", "Trip 2", "JPY").await, Ok(1)));
        assert!(matches!(store.update_group("nope", "X", "USD").await, Ok(0)));

        let Ok(Some(group)) = store.find_group("g1").await else {
            panic!("group missing");
        };
        assert_eq!(group.currency, "JPY");
        assert!(group.updated_at >= group.created_at);
    }
}
