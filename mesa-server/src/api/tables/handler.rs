//! Dining Table API Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::dining_table;
use crate::utils::AppResult;
use shared::models::DiningTable;

/// GET /tables - 获取当前租户的桌台
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = dining_table::find_all(&state.pool, user.restaurant_id).await?;
    Ok(Json(tables))
}
