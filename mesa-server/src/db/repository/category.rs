//! Category Repository

use super::{RepoError, RepoResult};
use shared::models::{Category, CategoryCreate};
use sqlx::SqlitePool;

const CATEGORY_SELECT: &str = "SELECT id, restaurant_id, name, description FROM category";

/// List categories; scoped to one restaurant when `restaurant_id` is set
pub async fn find_all(pool: &SqlitePool, restaurant_id: Option<i64>) -> RepoResult<Vec<Category>> {
    let rows = match restaurant_id {
        Some(rid) => {
            let sql = format!("{CATEGORY_SELECT} WHERE restaurant_id = ? ORDER BY name");
            sqlx::query_as::<_, Category>(&sql).bind(rid).fetch_all(pool).await?
        }
        None => {
            let sql = format!("{CATEGORY_SELECT} ORDER BY name");
            sqlx::query_as::<_, Category>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let sql = format!("{CATEGORY_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Category>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: CategoryCreate) -> RepoResult<Category> {
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO category (id, restaurant_id, name, description) VALUES (?1, ?2, ?3, ?4)")
        .bind(id)
        .bind(data.restaurant_id)
        .bind(&data.name)
        .bind(&data.description)
        .execute(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}
