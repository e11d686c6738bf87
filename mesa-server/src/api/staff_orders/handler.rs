//! 订单管理 API Handlers (staff)

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::{AppError, AppResult};
use shared::models::{OrderStatusUpdate, OrderWithItems};

/// GET /staff/orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderWithItems>>> {
    let orders = order::find_all(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /staff/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderWithItems>> {
    let found = order::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;
    Ok(Json(found))
}

/// PUT /staff/orders/:id - 推进订单状态 (经过状态机校验)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<OrderWithItems>> {
    let updated = order::update_status(&state.pool, id, payload.status, payload.table_id).await?;
    Ok(Json(updated))
}

/// DELETE /staff/orders/:id - 删除订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = order::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Order {}", id)));
    }
    Ok(Json(true))
}
