//! Restaurant API Handlers (admin)

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::repository::restaurant;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Restaurant, RestaurantCreate, RestaurantUpdate};

/// GET /admin/restaurants - 获取所有餐厅
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = restaurant::find_all(&state.pool).await?;
    Ok(Json(restaurants))
}

/// GET /admin/restaurants/:id - 获取单个餐厅
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Restaurant>> {
    let found = restaurant::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {}", id)))?;
    Ok(Json(found))
}

/// POST /admin/restaurants - 创建餐厅
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<(StatusCode, Json<Restaurant>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_required_text(&payload.identifier, "identifier", MAX_SHORT_TEXT_LEN)?;
    let created = restaurant::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /admin/restaurants/:id - 更新餐厅
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RestaurantUpdate>,
) -> AppResult<Json<Restaurant>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    let updated = restaurant::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /admin/restaurants/:id - 删除餐厅 (级联删除其所有数据)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = restaurant::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Restaurant {}", id)));
    }
    Ok(Json(true))
}
