//! Payment Repository
//!
//! 支付/收据记录：一次调用写入 payment + transactions + receipt 三条记录，
//! 同一事务内先 pending 再立即 completed（没有真实网关集成）。

use super::{RepoError, RepoResult};
use shared::models::{Order, Payment, PaymentStatus, Receipt, Transaction};
use sqlx::SqlitePool;

const PAYMENT_SELECT: &str = "SELECT id, order_id, restaurant_id, payment_method, \
     payment_status, amount, transaction_id, created_at, updated_at FROM payment";

/// Record a payment against an order, plus its derived transaction and
/// receipt rows, in one transaction.
///
/// No gateway integration exists: the payment is inserted as pending and
/// immediately marked completed. Callers validate amount and ownership.
pub async fn record(
    pool: &SqlitePool,
    order: &Order,
    method: &str,
    amount: f64,
    external_id: Option<&str>,
    receipt_data: Option<&str>,
) -> RepoResult<Payment> {
    let mut tx = pool.begin().await?;

    let now = shared::util::now_millis();
    let payment_id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO payment (id, order_id, restaurant_id, payment_method, payment_status, \
         amount, transaction_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
    )
    .bind(payment_id)
    .bind(order.id)
    .bind(order.restaurant_id)
    .bind(method)
    .bind(PaymentStatus::Pending)
    .bind(amount)
    .bind(external_id)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    // Stubbed gateway: settle immediately.
    sqlx::query("UPDATE payment SET payment_status = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(PaymentStatus::Completed)
        .bind(now)
        .bind(payment_id)
        .execute(&mut *tx)
        .await?;

    let transaction_id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO transactions (id, order_id, payment_id, restaurant_id, transaction_type, \
         amount, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 'charge', ?5, ?6, ?7, ?7)",
    )
    .bind(transaction_id)
    .bind(order.id)
    .bind(payment_id)
    .bind(order.restaurant_id)
    .bind(amount)
    .bind(PaymentStatus::Completed.as_str())
    .bind(now)
    .execute(&mut *tx)
    .await?;

    let receipt_id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO receipt (id, order_id, restaurant_id, user_id, total_amount, \
         payment_method, receipt_data, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )
    .bind(receipt_id)
    .bind(order.id)
    .bind(order.restaurant_id)
    .bind(order.user_id)
    .bind(amount)
    .bind(method)
    .bind(receipt_data)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(
        payment_id,
        order_id = order.id,
        amount,
        method,
        "Payment recorded"
    );

    find_by_id(pool, payment_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to record payment".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Payment>> {
    let sql = format!("{PAYMENT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Payment>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Payments for orders owned by `user_id`, newest first
pub async fn find_by_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Payment>> {
    let rows = sqlx::query_as::<_, Payment>(
        "SELECT p.id, p.order_id, p.restaurant_id, p.payment_method, p.payment_status, \
         p.amount, p.transaction_id, p.created_at, p.updated_at FROM payment p \
         JOIN orders o ON p.order_id = o.id WHERE o.user_id = ? ORDER BY p.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Audit rows for one order (transactions + receipts are write-once)
pub async fn transactions_for_order(
    pool: &SqlitePool,
    order_id: i64,
) -> RepoResult<Vec<Transaction>> {
    let rows = sqlx::query_as::<_, Transaction>(
        "SELECT id, order_id, payment_id, restaurant_id, transaction_type, amount, status, \
         created_at, updated_at FROM transactions WHERE order_id = ? ORDER BY created_at",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn receipts_for_order(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<Receipt>> {
    let rows = sqlx::query_as::<_, Receipt>(
        "SELECT id, order_id, restaurant_id, user_id, total_amount, payment_method, \
         receipt_data, created_at FROM receipt WHERE order_id = ? ORDER BY created_at",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
