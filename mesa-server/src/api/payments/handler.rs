//! Payment API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{order, payment};
use crate::money;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{Payment, PaymentCreate};

/// GET /payments - 获取自己订单的支付记录
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = payment::find_by_user(&state.pool, user.id).await?;
    Ok(Json(payments))
}

/// POST /payments - 为订单记录一笔支付
///
/// The amount must match the order total (0.01 tolerance). Without a
/// gateway the payment settles immediately; a transaction and receipt are
/// written alongside it.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    validate_required_text(&payload.payment_method, "payment_method", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.transaction_id, "transaction_id", MAX_SHORT_TEXT_LEN)?;
    money::validate_amount(payload.amount, "amount")?;

    // Other users' orders stay invisible: not-found, not forbidden.
    let found = order::find_by_id_for_user(&state.pool, payload.order, user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {}", payload.order)))?;

    if !money::amounts_match(payload.amount, found.order.total_price) {
        return Err(AppError::validation(format!(
            "amount {} does not match order total {}",
            payload.amount, found.order.total_price
        )));
    }

    let receipt_data = serde_json::json!({
        "order_id": found.order.id,
        "items": &found.order_items,
        "total": found.order.total_price,
    })
    .to_string();

    let recorded = payment::record(
        &state.pool,
        &found.order,
        &payload.payment_method,
        payload.amount,
        payload.transaction_id.as_deref(),
        Some(&receipt_data),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(recorded)))
}
