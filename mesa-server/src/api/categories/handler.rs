//! Category API Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::category;
use crate::utils::AppResult;
use shared::models::Category;

/// GET /categories - 获取当前租户的菜单分类
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Category>>> {
    let categories = category::find_all(&state.pool, user.restaurant_id).await?;
    Ok(Json(categories))
}
