//! User Repository

use super::{RepoError, RepoResult};
use shared::models::{ProfileUpdate, Role, User};
use sqlx::SqlitePool;

const USER_SELECT: &str =
    "SELECT id, restaurant_id, name, email, password_hash, role, created_at FROM user";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let sql = format!("{USER_SELECT} ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE email = ?");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert a user; `password_hash` is already argon2-hashed by the caller.
pub async fn create(
    pool: &SqlitePool,
    restaurant_id: Option<i64>,
    name: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> RepoResult<User> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO user (id, restaurant_id, name, email, password_hash, role, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(id)
    .bind(restaurant_id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!("email {email} already registered")),
        other => other,
    })?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

/// Self-service profile update (name only; email and role are read-only)
pub async fn update_profile(pool: &SqlitePool, id: i64, data: ProfileUpdate) -> RepoResult<User> {
    let rows = sqlx::query("UPDATE user SET name = COALESCE(?1, name) WHERE id = ?2")
        .bind(&data.name)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

/// Admin-side update; `password_hash` replaces the credential when present.
pub async fn admin_update(
    pool: &SqlitePool,
    id: i64,
    restaurant_id: Option<i64>,
    name: Option<&str>,
    email: Option<&str>,
    password_hash: Option<&str>,
    role: Option<Role>,
) -> RepoResult<User> {
    let rows = sqlx::query(
        "UPDATE user SET restaurant_id = COALESCE(?1, restaurant_id), name = COALESCE(?2, name), \
         email = COALESCE(?3, email), password_hash = COALESCE(?4, password_hash), \
         role = COALESCE(?5, role) WHERE id = ?6",
    )
    .bind(restaurant_id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM user WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
