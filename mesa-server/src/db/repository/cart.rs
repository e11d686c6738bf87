//! Cart Repository
//!
//! 购物车引擎：每个 (user, restaurant) 一个购物车，整体替换商品集合，
//! total_price 在每次变更时重新计算。

use super::{RepoError, RepoResult};
use crate::money;
use shared::models::{Cart, MenuItem};
use sqlx::SqlitePool;
use std::collections::BTreeSet;

const CART_SELECT: &str =
    "SELECT id, user_id, restaurant_id, total_price, created_at, updated_at FROM cart";

const CART_ITEMS_SELECT: &str = "SELECT m.id, m.restaurant_id, m.category_id, m.name, \
     m.description, m.price, m.availability FROM menu_item m \
     JOIN cart_item ci ON ci.item_id = m.id WHERE ci.cart_id = ?";

/// Return the user's cart for a restaurant, creating an empty one if absent.
///
/// The UNIQUE(user_id, restaurant_id) constraint plus ON CONFLICT DO NOTHING
/// makes concurrent first-requests converge on a single row.
pub async fn get_or_create(
    pool: &SqlitePool,
    user_id: i64,
    restaurant_id: i64,
) -> RepoResult<Cart> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO cart (id, user_id, restaurant_id, total_price, created_at, updated_at) \
         VALUES (?1, ?2, ?3, 0, ?4, ?4) \
         ON CONFLICT (user_id, restaurant_id) DO NOTHING",
    )
    .bind(id)
    .bind(user_id)
    .bind(restaurant_id)
    .bind(now)
    .execute(pool)
    .await?;

    let sql = format!("{CART_SELECT} WHERE user_id = ?1 AND restaurant_id = ?2");
    sqlx::query_as::<_, Cart>(&sql)
        .bind(user_id)
        .bind(restaurant_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create cart".into()))
}

/// The user's cart, if any exists
pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Option<Cart>> {
    let sql = format!("{CART_SELECT} WHERE user_id = ? ORDER BY created_at LIMIT 1");
    let row = sqlx::query_as::<_, Cart>(&sql)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Resolve the cart's current menu items
pub async fn items(pool: &SqlitePool, cart_id: i64) -> RepoResult<Vec<MenuItem>> {
    let rows = sqlx::query_as::<_, MenuItem>(CART_ITEMS_SELECT)
        .bind(cart_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Replace the cart's item set wholesale (not additive) and recompute the
/// total from current unit prices. Fails if any id does not resolve to an
/// existing menu item; duplicates collapse to one entry per item.
pub async fn set_items(pool: &SqlitePool, cart_id: i64, item_ids: &[i64]) -> RepoResult<Cart> {
    let distinct: BTreeSet<i64> = item_ids.iter().copied().collect();

    let mut tx = pool.begin().await?;

    let mut prices = Vec::with_capacity(distinct.len());
    for item_id in &distinct {
        let price: Option<(f64,)> =
            sqlx::query_as("SELECT price FROM menu_item WHERE id = ?")
                .bind(item_id)
                .fetch_optional(&mut *tx)
                .await?;
        match price {
            Some((p,)) => prices.push(p),
            None => {
                return Err(RepoError::Validation(format!(
                    "menu item {item_id} does not exist"
                )));
            }
        }
    }

    sqlx::query("DELETE FROM cart_item WHERE cart_id = ?")
        .bind(cart_id)
        .execute(&mut *tx)
        .await?;
    for item_id in &distinct {
        sqlx::query("INSERT INTO cart_item (cart_id, item_id) VALUES (?1, ?2)")
            .bind(cart_id)
            .bind(item_id)
            .execute(&mut *tx)
            .await?;
    }

    let total = money::sum_prices(&prices);
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE cart SET total_price = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(total)
        .bind(now)
        .bind(cart_id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cart {cart_id} not found")));
    }

    tx.commit().await?;

    let sql = format!("{CART_SELECT} WHERE id = ?");
    sqlx::query_as::<_, Cart>(&sql)
        .bind(cart_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Cart {cart_id} not found")))
}

/// Empty the cart and reset its total. Idempotent: clearing an already
/// empty cart succeeds.
pub async fn clear(pool: &SqlitePool, cart_id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM cart_item WHERE cart_id = ?")
        .bind(cart_id)
        .execute(&mut *tx)
        .await?;
    let now = shared::util::now_millis();
    sqlx::query("UPDATE cart SET total_price = 0, updated_at = ?1 WHERE id = ?2")
        .bind(now)
        .bind(cart_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}
