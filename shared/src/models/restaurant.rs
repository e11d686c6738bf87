//! Restaurant (tenant) Model

use serde::{Deserialize, Serialize};

/// Restaurant entity — the multi-tenancy boundary for every other record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub contact_info: String,
    /// External identifier handed out to integrations (opaque string)
    pub identifier: String,
    pub created_at: i64,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: String,
    pub contact_info: String,
    pub identifier: String,
}

/// Update restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact_info: Option<String>,
    pub identifier: Option<String>,
}
