//! User 管理 API Handlers (admin)

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::auth::password;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_email, validate_password, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{User, UserAdminCreate, UserAdminUpdate};

/// GET /admin/users - 获取所有用户
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let users = user::find_all(&state.pool).await?;
    Ok(Json(users))
}

/// GET /admin/users/:id - 获取单个用户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let found = user::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", id)))?;
    Ok(Json(found))
}

/// POST /admin/users - 创建用户 (可指定任意角色)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserAdminCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    let password_hash = password::hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

    let created = user::create(
        &state.pool,
        payload.restaurant_id,
        &payload.name,
        &payload.email,
        &password_hash,
        payload.role,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /admin/users/:id - 更新用户
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserAdminUpdate>,
) -> AppResult<Json<User>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(email) = &payload.email {
        validate_email(email)?;
    }
    let password_hash = match &payload.password {
        Some(raw) => {
            validate_password(raw)?;
            Some(
                password::hash_password(raw)
                    .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?,
            )
        }
        None => None,
    };

    let updated = user::admin_update(
        &state.pool,
        id,
        payload.restaurant_id,
        payload.name.as_deref(),
        payload.email.as_deref(),
        password_hash.as_deref(),
        payload.role,
    )
    .await?;
    Ok(Json(updated))
}

/// DELETE /admin/users/:id - 删除用户
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = user::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("User {}", id)));
    }
    Ok(Json(true))
}
