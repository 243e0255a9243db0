//! Expense DTOs. The response is [`crate::domain::ExpenseView`].

use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ServiceError;
use crate::service::ExpenseInput;

/// Amount as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// `12.5`
    Number(f64),
    /// `"12.50"`
    Text(String),
}

impl AmountInput {
    /// Resolves to a finite `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] if the text is not a number
    /// or the value is not finite.
    pub fn to_f64(&self) -> Result<f64, ServiceError> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| ServiceError::InvalidRequest(format!("invalid amount: {s}")))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ServiceError::InvalidRequest(format!(
                "invalid amount: {value}"
            )))
        }
    }
}

/// Request body for `POST /api/group/{id}/expense`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddExpenseRequest {
    /// Free-text description.
    pub desc: String,
    /// Amount, number or numeric string.
    #[schema(value_type = f64)]
    pub amount: AmountInput,
    /// Paying member id.
    #[serde(rename = "payerId")]
    pub payer_id: String,
    /// Split-strategy tag, e.g. `"equal"`.
    #[serde(rename = "splitType")]
    pub split_type: String,
    /// Opaque weights payload; stored verbatim.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub weights: Option<serde_json::Value>,
}

impl AddExpenseRequest {
    /// Converts the request into service input.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] for an unparseable amount.
    pub fn into_input(self) -> Result<ExpenseInput, ServiceError> {
        Ok(ExpenseInput {
            amount: self.amount.to_f64()?,
            description: self.desc,
            payer_id: self.payer_id,
            split_type: self.split_type,
            weights: self.weights,
        })
    }
}
