//! Cart Model

use super::menu_item::MenuItem;
use serde::{Deserialize, Serialize};

/// Per-user, per-restaurant staging area of selected menu items.
///
/// One cart per (user, restaurant) pair; `total_price` is derived and
/// recomputed on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub total_price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Cart with its resolved menu items (list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartWithItems {
    #[serde(flatten)]
    pub cart: Cart,
    pub items: Vec<MenuItem>,
}

/// Wholesale item replacement payload — the posted set *becomes* the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSetItems {
    pub item_ids: Vec<i64>,
}
