//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::{AppError, AppResult};
use shared::models::OrderWithItems;

/// GET /orders - 获取自己的历史订单 (含行项目)
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<OrderWithItems>>> {
    let orders = order::find_by_user(&state.pool, user.id).await?;
    Ok(Json(orders))
}

/// POST /orders - 结账：把购物车转换为订单
///
/// Fails with the empty-cart error when no cart exists or it holds zero
/// items; on success the cart has been cleared in the same transaction.
pub async fn checkout(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<(StatusCode, Json<OrderWithItems>)> {
    let created = order::create_from_cart(&state.pool, user.id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /orders/:id - 获取自己的单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderWithItems>> {
    let found = order::find_by_id_for_user(&state.pool, id, user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;
    Ok(Json(found))
}
