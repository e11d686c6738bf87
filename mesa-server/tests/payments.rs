//! Payment/receipt recorder: immediate settlement, derived audit rows,
//! amount invariants.

mod support;

use mesa_server::db::repository::{cart, order, payment};
use shared::models::{PaymentStatus, Role};

async fn checkout_order(
    pool: &sqlx::SqlitePool,
    rid: i64,
    user_id: i64,
) -> shared::models::OrderWithItems {
    let items = support::seed_menu(pool, rid).await;
    let basket = cart::get_or_create(pool, user_id, rid).await.unwrap();
    cart::set_items(pool, basket.id, &[items[0].id, items[1].id])
        .await
        .unwrap();
    order::create_from_cart(pool, user_id).await.unwrap()
}

#[tokio::test]
async fn recording_a_payment_settles_immediately() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let created = checkout_order(&pool, rid, user.id).await;

    let recorded = payment::record(&pool, &created.order, "card", 25.0, None, None)
        .await
        .unwrap();

    // No gateway: completed straight away
    assert_eq!(recorded.payment_status, PaymentStatus::Completed);
    assert_eq!(recorded.amount, 25.0);
    assert_eq!(recorded.order_id, created.order.id);
    assert_eq!(recorded.restaurant_id, rid);
}

#[tokio::test]
async fn payment_writes_transaction_and_receipt() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let created = checkout_order(&pool, rid, user.id).await;

    let recorded = payment::record(
        &pool,
        &created.order,
        "cash",
        25.0,
        Some("ext-123"),
        Some("{\"total\":25.0}"),
    )
    .await
    .unwrap();

    let txns = payment::transactions_for_order(&pool, created.order.id)
        .await
        .unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].payment_id, recorded.id);
    assert_eq!(txns[0].transaction_type, "charge");
    assert_eq!(txns[0].amount, 25.0);
    assert_eq!(txns[0].status, "completed");

    let receipts = payment::receipts_for_order(&pool, created.order.id)
        .await
        .unwrap();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].total_amount, 25.0);
    assert_eq!(receipts[0].payment_method, "cash");
    assert_eq!(receipts[0].user_id, user.id);
    assert_eq!(receipts[0].receipt_data.as_deref(), Some("{\"total\":25.0}"));
}

#[tokio::test]
async fn payments_are_listed_per_owner() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let other = support::seed_user(&pool, Some(rid), Role::Customer, "o@test.local").await;
    let created = checkout_order(&pool, rid, user.id).await;

    payment::record(&pool, &created.order, "card", 25.0, None, None)
        .await
        .unwrap();

    assert_eq!(payment::find_by_user(&pool, user.id).await.unwrap().len(), 1);
    assert!(payment::find_by_user(&pool, other.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn negative_transaction_amounts_violate_the_check_constraint() {
    let pool = support::setup_pool().await;
    let rid = support::seed_restaurant(&pool).await;
    let user = support::seed_user(&pool, Some(rid), Role::Customer, "c@test.local").await;
    let created = checkout_order(&pool, rid, user.id).await;
    let recorded = payment::record(&pool, &created.order, "card", 25.0, None, None)
        .await
        .unwrap();

    let raw = sqlx::query(
        "INSERT INTO transactions (id, order_id, payment_id, restaurant_id, transaction_type, \
         amount, status, created_at, updated_at) VALUES (1, ?1, ?2, ?3, 'refund', -25.0, 'completed', 0, 0)",
    )
    .bind(created.order.id)
    .bind(recorded.id)
    .bind(rid)
    .execute(&pool)
    .await;
    assert!(raw.is_err(), "amount >= 0 is CHECK-enforced");
}
