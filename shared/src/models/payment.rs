//! Payment, Transaction and Receipt Models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment state. Without a gateway the recorder moves pending → completed
/// in one step; `failed` exists for future gateway wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment recorded against an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub restaurant_id: i64,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub amount: f64,
    /// External gateway reference, when the caller has one
    pub transaction_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Record-payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub order: i64,
    pub payment_method: String,
    pub amount: f64,
    pub transaction_id: Option<String>,
}

/// Financial audit record derived from a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Transaction {
    pub id: i64,
    pub order_id: i64,
    pub payment_id: i64,
    pub restaurant_id: i64,
    pub transaction_type: String,
    pub amount: f64,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Receipt derived from a completed payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Receipt {
    pub id: i64,
    pub order_id: i64,
    pub restaurant_id: i64,
    pub user_id: i64,
    pub total_amount: f64,
    pub payment_method: String,
    /// JSON blob with the line-item breakdown as printed
    pub receipt_data: Option<String>,
    pub created_at: i64,
}
