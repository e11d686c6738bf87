//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::menu_item;
use crate::utils::{AppError, AppResult};
use shared::models::MenuItem;

/// GET /menu-items - 获取当前租户的可售菜品
///
/// Availability filtering is applied server-side; a hidden item never
/// reaches any client regardless of query input.
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_item::find_available(&state.pool, user.restaurant_id).await?;
    Ok(Json(items))
}

/// GET /menu-items/:id - 获取单个可售菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let item = menu_item::find_available_by_id(&state.pool, id)
        .await?
        .filter(|item| {
            user.restaurant_id
                .map(|rid| item.restaurant_id == rid)
                .unwrap_or(true)
        })
        .ok_or_else(|| AppError::not_found(format!("Menu item {}", id)))?;
    Ok(Json(item))
}
