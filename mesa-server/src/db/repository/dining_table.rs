//! Dining Table Repository

use super::{RepoError, RepoResult};
use shared::models::{DiningTable, DiningTableCreate};
use sqlx::SqlitePool;

const TABLE_SELECT: &str =
    "SELECT id, restaurant_id, table_number, seating_capacity, link FROM dining_table";

/// List tables; scoped to one restaurant when `restaurant_id` is set
pub async fn find_all(
    pool: &SqlitePool,
    restaurant_id: Option<i64>,
) -> RepoResult<Vec<DiningTable>> {
    let rows = match restaurant_id {
        Some(rid) => {
            let sql = format!("{TABLE_SELECT} WHERE restaurant_id = ? ORDER BY table_number");
            sqlx::query_as::<_, DiningTable>(&sql).bind(rid).fetch_all(pool).await?
        }
        None => {
            let sql = format!("{TABLE_SELECT} ORDER BY table_number");
            sqlx::query_as::<_, DiningTable>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<DiningTable>> {
    let sql = format!("{TABLE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, DiningTable>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: DiningTableCreate) -> RepoResult<DiningTable> {
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO dining_table (id, restaurant_id, table_number, seating_capacity, link) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(id)
    .bind(data.restaurant_id)
    .bind(&data.table_number)
    .bind(data.seating_capacity)
    .bind(&data.link)
    .execute(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!(
            "table {} already exists for this restaurant",
            data.table_number
        )),
        other => other,
    })?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create dining table".into()))
}
