//! Category Model

use serde::{Deserialize, Serialize};

/// Menu category (appetizers, drinks, ...) scoped to one restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
}
