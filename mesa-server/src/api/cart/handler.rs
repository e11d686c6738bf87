//! Cart API Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::cart;
use crate::utils::{AppError, AppResult};
use shared::models::{CartSetItems, CartWithItems};

/// Resolve the restaurant the user shops at; carts only exist inside a
/// tenant boundary.
fn restaurant_of(user: &CurrentUser) -> Result<i64, AppError> {
    user.restaurant_id
        .ok_or_else(|| AppError::validation("user is not attached to a restaurant"))
}

/// GET /cart - 获取当前用户购物车 (不存在时惰性创建空车)
pub async fn get_cart(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<CartWithItems>> {
    let restaurant_id = restaurant_of(&user)?;
    let cart = cart::get_or_create(&state.pool, user.id, restaurant_id).await?;
    let items = cart::items(&state.pool, cart.id).await?;
    Ok(Json(CartWithItems { cart, items }))
}

/// POST /cart - 整体替换购物车商品集合
///
/// The posted `item_ids` *become* the cart; the total is recomputed from
/// current unit prices.
pub async fn set_items(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CartSetItems>,
) -> AppResult<Json<CartWithItems>> {
    let restaurant_id = restaurant_of(&user)?;
    let cart = cart::get_or_create(&state.pool, user.id, restaurant_id).await?;
    let cart = cart::set_items(&state.pool, cart.id, &payload.item_ids).await?;
    let items = cart::items(&state.pool, cart.id).await?;
    Ok(Json(CartWithItems { cart, items }))
}

/// DELETE /cart/clear - 清空购物车
///
/// Clearing an already empty cart succeeds; clearing when no cart exists
/// reports not-found instead of creating one.
pub async fn clear(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<serde_json::Value>> {
    let cart = cart::find_by_user(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Cart"))?;
    cart::clear(&state.pool, cart.id).await?;
    Ok(Json(serde_json::json!({ "status": "cart cleared" })))
}
