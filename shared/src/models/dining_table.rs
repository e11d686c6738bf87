//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Physical table in a restaurant; table_number is unique per restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub restaurant_id: i64,
    pub table_number: String,
    pub seating_capacity: i64,
    /// Optional deep link (e.g. printed QR target) for ordering at this table
    pub link: Option<String>,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub restaurant_id: i64,
    pub table_number: String,
    pub seating_capacity: i64,
    pub link: Option<String>,
}
