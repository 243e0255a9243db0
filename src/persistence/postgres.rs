//! PostgreSQL implementation of the persistence layer.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::GroupStore;
use crate::config::ServiceConfig;
use crate::domain::records::{ExpenseRecord, GroupRecord, MemberRecord, NewExpense};
use crate::domain::weights::StoredWeights;
use crate::error::ServiceError;

type ExpenseRow = (
    String,
    String,
    String,
    f64,
    String,
    String,
    Option<serde_json::Value>,
    DateTime<Utc>,
);

const EXPENSE_COLUMNS: &str = "id, group_id, description, amount::FLOAT8, payer_id, split_type, \
                               weights, created_at";

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] if the database is
    /// unreachable or the URL is invalid.
    pub async fn connect(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        tracing::info!(
            max_connections = config.database_max_connections,
            "connected to postgres"
        );
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl GroupStore for PostgresStore {
    async fn migrate(&self) -> Result<(), ServiceError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ServiceError::PersistenceError(format!("migration failed: {e}")))?;
        tracing::info!("database migrations applied");
        Ok(())
    }

    async fn insert_group(
        &self,
        id: &str,
        name: &str,
        currency: &str,
    ) -> Result<(), ServiceError> {
        sqlx::query("INSERT INTO groups (id, name, currency) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(name)
            .bind(currency)
            .execute(&self.pool)
            .await
            .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(())
    }

    async fn update_group(
        &self,
        id: &str,
        name: &str,
        currency: &str,
    ) -> Result<u64, ServiceError> {
        let result = sqlx::query(
            "UPDATE groups SET name = $1, currency = $2, updated_at = now() WHERE id = $3",
        )
        .bind(name)
        .bind(currency)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn find_group(&self, id: &str) -> Result<Option<GroupRecord>, ServiceError> {
        let row = sqlx::query_as::<_, (String, String, String, DateTime<Utc>, DateTime<Utc>)>(
            "SELECT id, name, currency, created_at, updated_at FROM groups WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(row.map(
            |(id, name, currency, created_at, updated_at)| GroupRecord {
                id,
                name,
                currency,
                created_at,
                updated_at,
            },
        ))
    }

    async fn list_members(&self, group_id: &str) -> Result<Vec<MemberRecord>, ServiceError> {
        let rows = sqlx::query_as::<_, (String, String, String, DateTime<Utc>)>(
            "SELECT id, group_id, name, created_at FROM members \
             WHERE group_id = $1 ORDER BY created_at ASC",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, group_id, name, created_at)| MemberRecord {
                id,
                group_id,
                name,
                created_at,
            })
            .collect())
    }

    async fn list_expenses(&self, group_id: &str) -> Result<Vec<ExpenseRecord>, ServiceError> {
        let rows = sqlx::query_as::<_, ExpenseRow>(&format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses WHERE group_id = $1 ORDER BY created_at ASC"
        ))
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(rows.into_iter().map(expense_from_row).collect())
    }

    async fn insert_member(
        &self,
        id: &str,
        group_id: &str,
        name: &str,
    ) -> Result<(), ServiceError> {
        sqlx::query("INSERT INTO members (id, group_id, name) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(group_id)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(())
    }

    async fn delete_member(&self, group_id: &str, member_id: &str) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1 AND group_id = $2")
            .bind(member_id)
            .bind(group_id)
            .execute(&self.pool)
            .await
            .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn insert_expense(&self, expense: &NewExpense) -> Result<ExpenseRecord, ServiceError> {
        let row = sqlx::query_as::<_, ExpenseRow>(&format!(
            "INSERT INTO expenses (id, group_id, description, amount, payer_id, split_type, weights) \
             VALUES ($1, $2, $3, CAST($4 AS NUMERIC(10,2)), $5, $6, CAST($7 AS JSONB)) \
             RETURNING {EXPENSE_COLUMNS}"
        ))
        .bind(&expense.id)
        .bind(&expense.group_id)
        .bind(&expense.description)
        .bind(expense.amount)
        .bind(&expense.payer_id)
        .bind(&expense.split_type)
        .bind(&expense.weights_json)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(expense_from_row(row))
    }

    async fn delete_expense(
        &self,
        group_id: &str,
        expense_id: &str,
    ) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1 AND group_id = $2")
            .bind(expense_id)
            .bind(group_id)
            .execute(&self.pool)
            .await
            .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

fn expense_from_row(
    (id, group_id, description, amount, payer_id, split_type, weights, created_at): ExpenseRow,
) -> ExpenseRecord {
    ExpenseRecord {
        id,
        group_id,
        description,
        amount,
        payer_id,
        split_type,
        weights: StoredWeights::from(weights),
        created_at,
    }
}
