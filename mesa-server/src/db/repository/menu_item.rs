//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate};
use sqlx::SqlitePool;

const MENU_ITEM_SELECT: &str =
    "SELECT id, restaurant_id, category_id, name, description, price, availability FROM menu_item";

/// List available items. Availability filtering happens here, server-side;
/// the tenant scope applies when `restaurant_id` is set.
pub async fn find_available(
    pool: &SqlitePool,
    restaurant_id: Option<i64>,
) -> RepoResult<Vec<MenuItem>> {
    let rows = match restaurant_id {
        Some(rid) => {
            let sql = format!(
                "{MENU_ITEM_SELECT} WHERE availability = 1 AND restaurant_id = ? ORDER BY name"
            );
            sqlx::query_as::<_, MenuItem>(&sql).bind(rid).fetch_all(pool).await?
        }
        None => {
            let sql = format!("{MENU_ITEM_SELECT} WHERE availability = 1 ORDER BY name");
            sqlx::query_as::<_, MenuItem>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

/// Fetch one item regardless of availability (internal use)
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let sql = format!("{MENU_ITEM_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Fetch one available item (browse surface)
pub async fn find_available_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let sql = format!("{MENU_ITEM_SELECT} WHERE id = ? AND availability = 1");
    let row = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: MenuItemCreate) -> RepoResult<MenuItem> {
    if !data.price.is_finite() || data.price < 0.0 {
        return Err(RepoError::Validation(format!(
            "price must be non-negative, got {}",
            data.price
        )));
    }
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO menu_item (id, restaurant_id, category_id, name, description, price, availability) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(id)
    .bind(data.restaurant_id)
    .bind(data.category_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(data.availability)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}
