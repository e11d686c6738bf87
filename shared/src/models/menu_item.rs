//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Item on a restaurant's menu.
///
/// `price` is the live unit price; orders copy it into their line items at
/// checkout time, so later edits never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub restaurant_id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub availability: bool,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub restaurant_id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default = "default_true")]
    pub availability: bool,
}

fn default_true() -> bool {
    true
}
